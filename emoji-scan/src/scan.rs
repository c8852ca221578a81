use std::ops::Range;

use emoji_trie::SequenceSet;

use crate::sequences;

/// Returns true if and only if the given text contains an emoji.
pub fn has_emoji(text: &str) -> bool {
    has_emoji_with(sequences(), text)
}

/// Like `has_emoji`, but searches for sequences in the given set.
pub fn has_emoji_with(set: &SequenceSet, text: &str) -> bool {
    find_emojis_with(set, text).next().is_some()
}

/// Return a copy of the given text with every emoji removed.
pub fn filter_emoji(text: &str) -> String {
    filter_emoji_with(sequences(), text)
}

/// Like `filter_emoji`, but searches for sequences in the given set.
pub fn filter_emoji_with(set: &SequenceSet, text: &str) -> String {
    replace_emoji_with(set, text, |_, _| String::new())
}

/// Return a copy of the given text where every emoji is replaced by the
/// value returned from `replace`.
///
/// `replace` is called with the byte offset of each emoji in `text` and the
/// emoji itself. Everything else in `text` is copied unchanged.
pub fn replace_emoji<F>(text: &str, replace: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    replace_emoji_with(sequences(), text, replace)
}

/// Like `replace_emoji`, but searches for sequences in the given set.
pub fn replace_emoji_with<F>(
    set: &SequenceSet,
    text: &str,
    mut replace: F,
) -> String
where
    F: FnMut(usize, &str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in find_emojis_with(set, text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(&replace(m.start(), m.as_str()));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Return an iterator over every emoji in the given text.
pub fn find_emojis(text: &str) -> EmojiMatches<'static, '_> {
    find_emojis_with(sequences(), text)
}

/// Like `find_emojis`, but searches for sequences in the given set.
pub fn find_emojis_with<'s, 't>(
    set: &'s SequenceSet,
    text: &'t str,
) -> EmojiMatches<'s, 't> {
    EmojiMatches { set, text, pos: 0 }
}

/// A single emoji found in some text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmojiMatch<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> EmojiMatch<'t> {
    /// The byte offset at which this emoji starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The byte offset immediately following this emoji.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The byte range of this emoji.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The emoji itself.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }
}

/// An iterator over every emoji in some text.
///
/// The text is scanned from left to right. At each codepoint boundary, the
/// longest sequence in the set beginning there is reported, and scanning
/// resumes immediately after it. Codepoints covered by a match are never
/// examined again, so matches never overlap.
///
/// `'s` is the lifetime of the sequence set and `'t` is the lifetime of the
/// text being searched.
#[derive(Clone, Debug)]
pub struct EmojiMatches<'s, 't> {
    set: &'s SequenceSet,
    text: &'t str,
    pos: usize,
}

impl<'s, 't> Iterator for EmojiMatches<'s, 't> {
    type Item = EmojiMatch<'t>;

    fn next(&mut self) -> Option<EmojiMatch<'t>> {
        while let Some(cp) = self.text[self.pos..].chars().next() {
            let start = self.pos;
            match self.set.has_emoji_prefix_str(&self.text[start..]) {
                Some(len) => {
                    self.pos = start + len;
                    return Some(EmojiMatch {
                        text: self.text,
                        start,
                        end: self.pos,
                    });
                }
                None => self.pos += cp.len_utf8(),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use emoji_trie::SequenceSet;

    use super::*;

    fn matches(text: &str) -> Vec<&str> {
        find_emojis(text).map(|m| m.as_str()).collect()
    }

    #[test]
    fn has() {
        assert!(has_emoji("I ❤️ Rust"));
        assert!(has_emoji("⌚"));
        assert!(has_emoji("#️⃣"));
        assert!(!has_emoji(""));
        assert!(!has_emoji("no emoji here"));
        assert!(!has_emoji("# * 0"));
        // A lone regional indicator is not a flag.
        assert!(!has_emoji("\u{1F1FA}"));
        // Nor is a lone zero width joiner.
        assert!(!has_emoji("\u{200D}"));
    }

    #[test]
    fn find_spans() {
        let text = "a😀b🇺🇸c";
        let got: Vec<(usize, usize, &str)> = find_emojis(text)
            .map(|m| (m.start(), m.end(), m.as_str()))
            .collect();
        assert_eq!(got, vec![(1, 5, "😀"), (6, 14, "🇺🇸")]);
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(matches("👨‍👩‍👧‍👦"), vec!["👨‍👩‍👧‍👦"]);
        assert_eq!(matches("👨‍👩‍👧"), vec!["👨‍👩‍👧"]);
        assert_eq!(matches("🤷🏻‍♂️"), vec!["🤷🏻‍♂️"]);
        assert_eq!(matches("\u{231A}\u{FE0E}"), vec!["\u{231A}\u{FE0E}"]);
        assert_eq!(matches("🏴󠁧󠁢󠁳󠁣󠁴󠁿"), vec!["🏴󠁧󠁢󠁳󠁣󠁴󠁿"]);
    }

    #[test]
    fn broken_sequence_falls_back() {
        // The family sequence is cut short, so its members are found one at
        // a time and the joiners in between are left alone.
        assert_eq!(matches("👨\u{200D}👩\u{200D}x"), vec!["👨", "👩"]);
        assert_eq!(
            filter_emoji("👨\u{200D}👩\u{200D}x"),
            "\u{200D}\u{200D}x"
        );
    }

    #[test]
    fn adjacent() {
        assert_eq!(matches("🔥🔥🔥"), vec!["🔥", "🔥", "🔥"]);
        assert_eq!(matches("👍🏽👍"), vec!["👍🏽", "👍"]);
    }

    #[test]
    fn filter() {
        assert_eq!(filter_emoji("I ❤️ Rust"), "I  Rust");
        assert_eq!(filter_emoji("🌀🌀"), "");
        assert_eq!(filter_emoji("plain"), "plain");
        assert_eq!(filter_emoji(""), "");
    }

    #[test]
    fn replace() {
        let got = replace_emoji("x🔥y😀", |i, emoji| {
            format!("<{}:{}>", i, emoji.len())
        });
        assert_eq!(got, "x<1:4>y<6:4>");

        let mut calls = vec![];
        replace_emoji("a👩‍🚀b", |i, emoji| {
            calls.push((i, emoji.to_string()));
            emoji.to_string()
        });
        assert_eq!(calls, vec![(1, "👩‍🚀".to_string())]);
    }

    #[test]
    fn custom_set() {
        let mut set = SequenceSet::new();
        set.add_sequence(&['a', 'b'], "ab");
        set.add_sequence(&['b'], "b");
        assert!(has_emoji_with(&set, "xab"));
        assert!(!has_emoji_with(&set, "😀"));
        assert_eq!(filter_emoji_with(&set, "aab abb"), "a ");
        let spans: Vec<_> =
            find_emojis_with(&set, "abb").map(|m| m.range()).collect();
        assert_eq!(spans, vec![0..2, 2..3]);
        assert_eq!(
            replace_emoji_with(&set, "cab", |_, s| s.to_uppercase()),
            "cAB"
        );
    }
}
