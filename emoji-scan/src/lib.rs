/*!
Find Unicode emoji sequences in text.

This crate answers questions like "does this text contain an emoji?" and
supports removing or rewriting every emoji in a string. Emoji are matched
against a fixed table of known sequences, generated ahead of time from the
Unicode emoji data files by `emoji-generate`. At every position, the longest
known sequence wins, so a zero width joiner sequence like 👨‍👩‍👧‍👦 is
reported as a single emoji rather than four.

# Example

```
assert!(emoji_scan::has_emoji("I ❤️ Rust"));

let text = "thumbs 👍🏽 up";
assert_eq!(emoji_scan::filter_emoji(text), "thumbs  up");

let replaced = emoji_scan::replace_emoji(text, |_, emoji| {
    format!("[{}]", emoji.chars().count())
});
assert_eq!(replaced, "thumbs [2] up");
```

Every search routine has a `_with` variant that accepts an explicit
[`SequenceSet`], for callers that build their own table.
*/

#![deny(missing_docs)]

use once_cell::sync::Lazy;

pub use emoji_trie::SequenceSet;

pub use crate::chars::{iterate_chars, Char, CharIterator};
pub use crate::scan::{
    filter_emoji, filter_emoji_with, find_emojis, find_emojis_with,
    has_emoji, has_emoji_with, replace_emoji, replace_emoji_with, EmojiMatch,
    EmojiMatches,
};

/// The `Date:` of the emoji data files that the built in table was generated
/// from.
///
/// ```
/// assert!(emoji_scan::UNICODE_EMOJI_DATE.ends_with("GMT"));
/// ```
pub use crate::tables::emoji_sequences::UNICODE_EMOJI_DATE;

mod chars;
mod scan;
mod tables;

static SEQUENCES: Lazy<SequenceSet> = Lazy::new(|| {
    let mut set = SequenceSet::new();
    for &(seq, label) in tables::emoji_sequences::EMOJI_SEQUENCES {
        set.add_sequence(seq, label);
    }
    set
});

/// Return the built in set of emoji sequences.
///
/// The set is built the first time this is called, and never changes
/// afterwards.
pub fn sequences() -> &'static SequenceSet {
    &SEQUENCES
}

#[cfg(test)]
mod tests {
    use super::{sequences, tables, UNICODE_EMOJI_DATE};

    #[test]
    fn table_is_loaded() {
        let set = sequences();
        assert_eq!(set.len(), tables::emoji_sequences::EMOJI_SEQUENCES.len());
        assert!(set.contains(&['\u{1F600}']));
        assert!(set.contains(&['\u{1F600}', '\u{FE0E}']));
        assert_eq!(set.label(&['\u{1F525}']), Some("Basic_Emoji ==> 🔥"));
    }

    #[test]
    fn date_comes_from_the_zwj_file() {
        assert_eq!(UNICODE_EMOJI_DATE, "2023-06-05, 20:04:50 GMT");
    }
}
