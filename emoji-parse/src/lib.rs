/*!
A library for parsing the emoji sequence data files published by Unicode.

The files in question are `emoji-sequences.txt` and `emoji-zwj-sequences.txt`,
which can be downloaded from <https://www.unicode.org/Public/emoji/>. Both
files share one line format: a `;` delimited record whose first field is
either a codepoint range (`231A..231B`) or a space separated codepoint
sequence (`1F468 200D 1F469`), and whose second field names the type of
sequence.
*/

#![deny(missing_docs)]

pub use crate::common::{
    emoji_data_date, parse_codepoint, CodepointRange, Codepoints, Line,
    LineParser, SequenceFile,
};
pub use crate::error::{Error, ErrorKind};

pub use crate::emoji_sequences::EmojiSequence;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

mod common;
mod error;

mod emoji_sequences;
