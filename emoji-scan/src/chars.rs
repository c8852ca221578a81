use emoji_trie::SequenceSet;

use crate::sequences;

/// Return an iterator over the characters in the given text, where an emoji
/// sequence counts as a single character.
pub fn iterate_chars(text: &str) -> CharIterator<'static> {
    CharIterator::with_set(sequences(), text)
}

/// A single character yielded by a `CharIterator`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Char {
    /// The text of this character. This is either one codepoint or a
    /// complete emoji sequence.
    pub text: String,
    /// Whether this character is an emoji sequence.
    pub is_emoji: bool,
}

/// A cursor over text that steps over one character at a time.
///
/// Each step yields either a complete emoji sequence (the longest one that
/// starts at the cursor) or a single codepoint. Concatenating every
/// character in order reproduces the original text.
///
/// The cursor is moved with `advance`, after which `current` and
/// `current_is_emoji` describe the character just stepped over. This type
/// also implements `Iterator`, which is often more convenient.
///
/// There is no way to rewind the cursor. Create a new iterator to scan the
/// text again.
#[derive(Clone, Debug)]
pub struct CharIterator<'s> {
    set: &'s SequenceSet,
    chars: Vec<char>,
    pos: usize,
    current: String,
    is_emoji: bool,
}

impl<'s> CharIterator<'s> {
    /// Create an iterator over the given text that recognizes the emoji
    /// sequences in the given set.
    pub fn with_set(set: &'s SequenceSet, text: &str) -> CharIterator<'s> {
        CharIterator {
            set,
            chars: text.chars().collect(),
            pos: 0,
            current: String::new(),
            is_emoji: false,
        }
    }

    /// Step over the next character.
    ///
    /// This returns false once the end of the text has been reached, in
    /// which case `current` and `current_is_emoji` are left unchanged.
    pub fn advance(&mut self) -> bool {
        let rest = &self.chars[self.pos..];
        if rest.is_empty() {
            return false;
        }
        let (len, is_emoji) = match self.set.has_emoji_prefix_chars(rest) {
            Some(len) => (len, true),
            None => (1, false),
        };
        self.current.clear();
        self.current.extend(&rest[..len]);
        self.is_emoji = is_emoji;
        self.pos += len;
        true
    }

    /// The character most recently stepped over. This is empty before the
    /// first call to `advance`.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether the character most recently stepped over is an emoji.
    pub fn current_is_emoji(&self) -> bool {
        self.is_emoji
    }
}

impl<'s> Iterator for CharIterator<'s> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if !self.advance() {
            return None;
        }
        Some(Char { text: self.current.clone(), is_emoji: self.is_emoji })
    }
}

#[cfg(test)]
mod tests {
    use emoji_trie::SequenceSet;

    use super::{iterate_chars, Char, CharIterator};

    fn c(text: &str, is_emoji: bool) -> Char {
        Char { text: text.to_string(), is_emoji }
    }

    #[test]
    fn cursor() {
        let mut it = iterate_chars("a👨‍👩‍👧‍👦b");
        assert_eq!(it.current(), "");
        assert!(!it.current_is_emoji());

        assert!(it.advance());
        assert_eq!(it.current(), "a");
        assert!(!it.current_is_emoji());

        assert!(it.advance());
        assert_eq!(it.current(), "👨‍👩‍👧‍👦");
        assert!(it.current_is_emoji());

        assert!(it.advance());
        assert_eq!(it.current(), "b");
        assert!(!it.current_is_emoji());

        assert!(!it.advance());
        assert_eq!(it.current(), "b");
        assert!(!it.current_is_emoji());
        assert!(!it.advance());
    }

    #[test]
    fn end_keeps_emoji_state() {
        let mut it = iterate_chars("🇯🇵");
        assert!(it.advance());
        assert!(!it.advance());
        assert_eq!(it.current(), "🇯🇵");
        assert!(it.current_is_emoji());
    }

    #[test]
    fn empty() {
        let mut it = iterate_chars("");
        assert!(!it.advance());
        assert_eq!(it.current(), "");
        assert_eq!(iterate_chars("").count(), 0);
    }

    #[test]
    fn iterator() {
        let got: Vec<Char> = iterate_chars("☕ #️⃣!").collect();
        assert_eq!(
            got,
            vec![
                c("☕", true),
                c(" ", false),
                c("#️⃣", true),
                c("!", false),
            ]
        );
    }

    #[test]
    fn custom_set() {
        let mut set = SequenceSet::new();
        set.add_sequence(&['o', 'k'], "ok");
        let got: Vec<Char> = CharIterator::with_set(&set, "look").collect();
        assert_eq!(
            got,
            vec![c("l", false), c("o", false), c("ok", true)]
        );
    }
}
