use emoji_scan::{
    filter_emoji, find_emojis, has_emoji, iterate_chars, replace_emoji,
    sequences, Char,
};

const CORPUS: &[&str] = &[
    "",
    "plain ascii text",
    "I ❤️ Rust",
    "👨‍👩‍👧‍👦",
    "family: 👨‍👩‍👧‍👦 and a couple 👨‍❤️‍👨",
    "cut short 👨\u{200D}👩\u{200D} there",
    "flags 🇨🇦🇩🇪🇫🇷 and 🏴󠁧󠁢󠁥󠁮󠁧󠁿, lone \u{1F1FA} indicator",
    "keycaps #️⃣ *️⃣ 0️⃣ 9️⃣ vs # * 0 9",
    "tones 👋🏻👋🏼👋🏽👋🏾👋🏿 👍",
    "text style ⌚\u{FE0E} emoji style 😀\u{FE0E}",
    "zwj \u{200D}\u{200D} selectors \u{FE0F}\u{FE0E}",
    "mixed 🤷🏻‍♂️🤷‍♀️🧑‍🚀🏳️‍🌈🏴‍☠️🐻‍❄️😮‍💨😶‍🌫️❤️‍🔥",
    "ünïcödé ñot émoji ∑∫ 漢字",
    "🫠🫠🫠",
];

#[test]
fn single_codepoints_match_alone_and_with_text_presentation() {
    let set = sequences();
    for (seq, _) in set.iter() {
        if seq.len() != 1 {
            continue;
        }
        let cp = seq[0];
        let alone = cp.to_string();
        assert_eq!(
            set.has_emoji_prefix(alone.as_bytes()),
            Some(cp.len_utf8()),
            "{:04X}",
            cp as u32,
        );

        let text = format!("{}\u{FE0E}", cp);
        assert_eq!(
            set.has_emoji_prefix(text.as_bytes()),
            Some(text.len()),
            "{:04X} FE0E",
            cp as u32,
        );
    }
}

#[test]
fn filtered_text_has_no_emoji() {
    let set = sequences();
    for text in CORPUS {
        let filtered = filter_emoji(text);
        assert!(!has_emoji(&filtered), "{:?}", filtered);
        for (i, _) in filtered.char_indices() {
            assert_eq!(set.has_emoji_prefix_str(&filtered[i..]), None);
        }
    }
}

#[test]
fn filter_keeps_everything_else() {
    for text in CORPUS {
        let mut expected = String::new();
        for ch in iterate_chars(text) {
            if !ch.is_emoji {
                expected.push_str(&ch.text);
            }
        }
        assert_eq!(filter_emoji(text), expected);
    }
}

#[test]
fn filter_is_idempotent() {
    for text in CORPUS {
        let once = filter_emoji(text);
        assert_eq!(filter_emoji(&once), once);
    }
}

#[test]
fn identity_replacement_reproduces_text() {
    for text in CORPUS {
        let got = replace_emoji(text, |_, emoji| emoji.to_string());
        assert_eq!(&got, text);
    }
}

#[test]
fn replacement_offsets_point_at_emoji() {
    for text in CORPUS {
        replace_emoji(text, |i, emoji| {
            assert_eq!(&text[i..i + emoji.len()], emoji);
            String::new()
        });
    }
}

#[test]
fn matches_agree_with_char_iterator() {
    for text in CORPUS {
        let from_matches: Vec<&str> =
            find_emojis(text).map(|m| m.as_str()).collect();
        let from_chars: Vec<String> = iterate_chars(text)
            .filter(|ch| ch.is_emoji)
            .map(|ch| ch.text)
            .collect();
        assert_eq!(from_matches, from_chars);
    }
}

#[test]
fn char_iterator_reconstructs_text() {
    for text in CORPUS {
        let chars: Vec<Char> = iterate_chars(text).collect();
        let joined: String = chars.iter().map(|ch| ch.text.as_str()).collect();
        assert_eq!(&joined, text);
        for ch in chars.iter().filter(|ch| !ch.is_emoji) {
            assert_eq!(ch.text.chars().count(), 1);
        }
    }
}

#[test]
fn family_is_one_character() {
    let text = "hi 👨‍👩‍👧‍👦!";
    let mut it = iterate_chars(text);
    let mut got = vec![];
    while it.advance() {
        got.push((it.current().to_string(), it.current_is_emoji()));
    }
    assert_eq!(
        got,
        vec![
            ("h".to_string(), false),
            ("i".to_string(), false),
            (" ".to_string(), false),
            ("👨‍👩‍👧‍👦".to_string(), true),
            ("!".to_string(), false),
        ]
    );
}
