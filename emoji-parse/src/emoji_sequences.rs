use std::fmt;
use std::str::FromStr;

use crate::common::Codepoints;
use crate::error::Error;

/// A single record in `emoji-sequences.txt` or `emoji-zwj-sequences.txt`.
///
/// The field names were taken from the header of emoji-sequences.txt:
///
/// ```text
/// code_point(s) ; type_field ; description # comments
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EmojiSequence {
    /// The codepoint range or codepoint sequence for this record.
    pub codepoints: Codepoints,
    /// The type of sequence, e.g., `Basic_Emoji` or
    /// `RGI_Emoji_ZWJ_Sequence`.
    pub type_field: String,
    /// A short description of the sequence, when the record has one.
    pub description: Option<String>,
}

impl FromStr for EmojiSequence {
    type Err = Error;

    fn from_str(line: &str) -> Result<EmojiSequence, Error> {
        let fields: Vec<&str> = line.trim().split(';').collect();
        if fields.len() < 2 {
            return err!("expected at least two ';' separated fields");
        }
        let description = fields
            .get(2)
            .map(|field| strip_comment(field))
            .filter(|field| !field.is_empty())
            .map(|field| field.to_string());
        Ok(EmojiSequence {
            codepoints: fields[0].trim().parse()?,
            type_field: strip_comment(fields[1]).to_string(),
            description,
        })
    }
}

impl fmt::Display for EmojiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ; {}", self.codepoints, self.type_field)?;
        if let Some(ref description) = self.description {
            write!(f, " ; {}", description)?;
        }
        Ok(())
    }
}

/// Remove a trailing `# ...` comment from a field, along with any
/// surrounding whitespace.
fn strip_comment(field: &str) -> &str {
    match field.find('#') {
        Some(i) => field[..i].trim(),
        None => field.trim(),
    }
}
