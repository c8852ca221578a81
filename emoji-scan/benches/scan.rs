use criterion::{criterion_group, criterion_main, Criterion};

static INPUT: &str = "
Both 👬 dense 😍 and sparse tries can 🦎 be 😉 walked one ☠️😅 codepoint at a time.
The family 👨‍👩‍👧‍👦 is a single emoji, and so is the astronaut 🧑‍🚀 and the flag 🇯🇵.
Text presentation ⌚︎ selectors 🌀︎ count too, as do keycaps #️⃣ 1️⃣ and tags 🏴󠁧󠁢󠁷󠁬󠁳󠁿.
Most 🐻‍❄️ text 😮‍💨 has 💩 no emoji at all, which makes the fallback path the common one.
Skin 👋🏻👋🏼👋🏽 tones 👍🏿 attach to their base, but broken 👨‍👩‍ joins do not.
";

fn criterion_benchmark(c: &mut Criterion) {
    assert!(emoji_scan::has_emoji(INPUT));

    let mut g = c.benchmark_group("scan");
    g.bench_with_input("find_emojis", INPUT, |b, x| {
        b.iter(|| emoji_scan::find_emojis(x).count())
    });
    g.bench_with_input("filter_emoji", INPUT, |b, x| {
        b.iter(|| emoji_scan::filter_emoji(x))
    });
    g.bench_with_input("iterate_chars", INPUT, |b, x| {
        b.iter(|| emoji_scan::iterate_chars(x).count())
    });
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
