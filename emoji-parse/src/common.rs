use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::emoji_sequences::EmojiSequence;
use crate::error::Error;

/// One of the emoji sequence data files.
///
/// Both files use the same line format, so they are parsed into the same
/// record type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequenceFile {
    /// `emoji-sequences.txt`, which lists basic emoji, keycaps, flags, tag
    /// sequences and modifier sequences.
    Sequences,
    /// `emoji-zwj-sequences.txt`, which lists zero width joiner sequences.
    ZwjSequences,
}

impl SequenceFile {
    /// Every sequence file, in the order in which they should be processed.
    pub const ALL: [SequenceFile; 2] =
        [SequenceFile::Sequences, SequenceFile::ZwjSequences];

    /// Return the file name of this file, relative to an emoji data
    /// directory.
    pub fn relative_file_path(&self) -> &'static Path {
        match *self {
            SequenceFile::Sequences => Path::new("emoji-sequences.txt"),
            SequenceFile::ZwjSequences => {
                Path::new("emoji-zwj-sequences.txt")
            }
        }
    }

    /// Return the full path to this file inside the given emoji data
    /// directory.
    pub fn file_path<P: AsRef<Path>>(&self, emoji_dir: P) -> PathBuf {
        emoji_dir.as_ref().join(self.relative_file_path())
    }

    /// Open this file inside the given emoji data directory and return a
    /// parser over its lines.
    pub fn from_dir<P: AsRef<Path>>(
        &self,
        emoji_dir: P,
    ) -> Result<LineParser<io::BufReader<File>>, Error> {
        LineParser::from_path(self.file_path(emoji_dir))
    }
}

/// Return the version of the emoji data in the given directory.
///
/// The version is the value of the last `# Date: ...` comment found in the
/// sequence files, which are read in the order given by `SequenceFile::ALL`.
/// If no such comment exists, then `None` is returned.
pub fn emoji_data_date<P: AsRef<Path>>(
    emoji_dir: P,
) -> Result<Option<String>, Error> {
    let mut date = None;
    for file in SequenceFile::ALL.iter() {
        for result in file.from_dir(&emoji_dir)? {
            if let Line::Date(d) = result? {
                date = Some(d);
            }
        }
    }
    Ok(date)
}

/// A single classified line from an emoji sequence data file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line, or one made of only whitespace.
    Blank,
    /// A comment that carries no information.
    Comment,
    /// A `# Date: ...` comment. The value is everything after `Date:`.
    Date(String),
    /// A record describing one or more sequences.
    Record(EmojiSequence),
    /// A line that is not a comment but has fewer than two fields. These
    /// are skipped.
    Skipped,
}

impl Line {
    /// Classify and parse a single line.
    ///
    /// An error is only returned for a line that looks like a record (it has
    /// at least two fields) but whose codepoints cannot be parsed.
    pub fn parse(line: &str) -> Result<Line, Error> {
        static DATE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^#\s*Date:\s*(?P<date>.+)$").unwrap()
        });

        let line = line.trim();
        if line.is_empty() {
            return Ok(Line::Blank);
        }
        if line.starts_with('#') {
            return Ok(match DATE.captures(line) {
                Some(caps) => Line::Date(caps["date"].trim().to_string()),
                None => Line::Comment,
            });
        }
        if !line.contains(';') {
            return Ok(Line::Skipped);
        }
        Ok(Line::Record(line.parse()?))
    }
}

/// A parser that classifies every line in an emoji sequence data file.
///
/// Blank lines and plain comments are dropped. Lines with too few fields are
/// dropped with a warning. Every other line is yielded as either a
/// `Line::Date` or a `Line::Record`.
#[derive(Debug)]
pub struct LineParser<R> {
    path: Option<PathBuf>,
    rdr: R,
    line: String,
    line_number: u64,
}

impl LineParser<io::BufReader<File>> {
    /// Create a new parser from the given file path.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<LineParser<io::BufReader<File>>, Error> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|err| Error::io(err, Some(path)))?;
        Ok(LineParser {
            path: Some(path.to_path_buf()),
            rdr: io::BufReader::new(file),
            line: String::new(),
            line_number: 0,
        })
    }
}

impl<R: BufRead> LineParser<R> {
    /// Create a new parser that reads lines from the given reader.
    pub fn new(rdr: R) -> LineParser<R> {
        LineParser { path: None, rdr, line: String::new(), line_number: 0 }
    }
}

impl<R: BufRead> Iterator for LineParser<R> {
    type Item = Result<Line, Error>;

    fn next(&mut self) -> Option<Result<Line, Error>> {
        loop {
            self.line.clear();
            let n = match self.rdr.read_line(&mut self.line) {
                Err(err) => {
                    let err = Error::io(err, self.path.as_deref());
                    return Some(Err(err));
                }
                Ok(n) => n,
            };
            if n == 0 {
                return None;
            }
            self.line_number += 1;

            let line = match Line::parse(&self.line) {
                Err(err) => {
                    let path = self.path.as_deref();
                    return Some(Err(err.at(path, self.line_number)));
                }
                Ok(line) => line,
            };
            match line {
                Line::Blank | Line::Comment => continue,
                Line::Skipped => {
                    tracing::warn!(
                        path = ?self.path,
                        line = self.line_number,
                        "skipping line with fewer than two fields: {:?}",
                        self.line.trim(),
                    );
                    continue;
                }
                line => return Some(Ok(line)),
            }
        }
    }
}

/// Parse a single hexadecimal codepoint.
///
/// An error is returned if the string is not a hexadecimal number or if the
/// number is not a Unicode scalar value.
pub fn parse_codepoint(s: &str) -> Result<char, Error> {
    let n = match u32::from_str_radix(s, 16) {
        Ok(n) => n,
        Err(err) => {
            return err!(
                "failed to parse {:?} as a hexadecimal codepoint: {}",
                s,
                err
            );
        }
    };
    match std::char::from_u32(n) {
        Some(cp) => Ok(cp),
        None => err!("codepoint U+{:04X} is not a Unicode scalar value", n),
    }
}

/// An inclusive range of codepoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodepointRange {
    /// The first codepoint in the range.
    pub start: char,
    /// The last codepoint in the range.
    pub end: char,
}

impl CodepointRange {
    /// Return an iterator over every codepoint in this range, in ascending
    /// order.
    pub fn iter(&self) -> std::ops::RangeInclusive<char> {
        self.start..=self.end
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}..{:04X}", self.start as u32, self.end as u32)
    }
}

/// The codepoint field of a record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Codepoints {
    /// An inclusive range, where every codepoint in the range is an emoji
    /// on its own.
    Range(CodepointRange),
    /// A single sequence of one or more codepoints.
    Sequence(Vec<char>),
}

impl Default for Codepoints {
    fn default() -> Codepoints {
        Codepoints::Sequence(vec![])
    }
}

impl FromStr for Codepoints {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codepoints, Error> {
        if s.contains("..") {
            let mut parts = s.splitn(2, "..");
            let start = parse_codepoint(parts.next().unwrap_or(""))?;
            let end = parse_codepoint(parts.next().unwrap_or(""))?;
            if start > end {
                return err!(
                    "invalid codepoint range {:04X}..{:04X}",
                    start as u32,
                    end as u32
                );
            }
            return Ok(Codepoints::Range(CodepointRange { start, end }));
        }
        let seq = s
            .split(' ')
            .map(parse_codepoint)
            .collect::<Result<Vec<char>, Error>>()?;
        Ok(Codepoints::Sequence(seq))
    }
}

impl fmt::Display for Codepoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Codepoints::Range(ref range) => range.fmt(f),
            Codepoints::Sequence(ref seq) => {
                for (i, &cp) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:04X}", cp as u32)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::{
        emoji_data_date, parse_codepoint, CodepointRange, Codepoints, Line,
        LineParser, SequenceFile,
    };

    #[test]
    fn codepoint() {
        assert_eq!(parse_codepoint("1F600").unwrap(), '\u{1F600}');
        assert_eq!(parse_codepoint("fe0e").unwrap(), '\u{FE0E}');
        assert!(parse_codepoint("").is_err());
        assert!(parse_codepoint("XYZ").is_err());
        assert!(parse_codepoint("D800").is_err());
        assert!(parse_codepoint("110000").is_err());
    }

    #[test]
    fn codepoints_range() {
        let cps: Codepoints = "231A..231B".parse().unwrap();
        let range = CodepointRange { start: '\u{231A}', end: '\u{231B}' };
        assert_eq!(cps, Codepoints::Range(range));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec!['⌚', '⌛']);
        assert_eq!(cps.to_string(), "231A..231B");

        assert!("231B..231A".parse::<Codepoints>().is_err());
        assert!("231A..".parse::<Codepoints>().is_err());
    }

    #[test]
    fn codepoints_sequence() {
        let cps: Codepoints = "0023 FE0F 20E3".parse().unwrap();
        let keycap = vec!['#', '\u{FE0F}', '\u{20E3}'];
        assert_eq!(cps, Codepoints::Sequence(keycap));
        assert_eq!(cps.to_string(), "0023 FE0F 20E3");

        assert!("0023  FE0F".parse::<Codepoints>().is_err());
        assert!("0023 XYZ".parse::<Codepoints>().is_err());
    }

    #[test]
    fn classify() {
        assert_eq!(Line::parse("").unwrap(), Line::Blank);
        assert_eq!(Line::parse("   \n").unwrap(), Line::Blank);
        assert_eq!(
            Line::parse("# emoji-sequences.txt\n").unwrap(),
            Line::Comment
        );
        assert_eq!(
            Line::parse("# Date: 2023-02-01, 02:22:54 GMT\n").unwrap(),
            Line::Date("2023-02-01, 02:22:54 GMT".to_string())
        );
        assert_eq!(Line::parse("1F600 Basic_Emoji").unwrap(), Line::Skipped);
        assert!(Line::parse("XYZ ; Basic_Emoji").is_err());
        match Line::parse("1F600 ; Basic_Emoji ; grinning face").unwrap() {
            Line::Record(rec) => assert_eq!(rec.type_field, "Basic_Emoji"),
            line => panic!("expected a record, got {:?}", line),
        }
    }

    #[test]
    fn line_parser() {
        let data = "\
# emoji-zwj-sequences.txt
# Date: 2022-08-12, 20:24:39 GMT

# RGI_Emoji_ZWJ_Sequence
1F468 200D 2764 FE0F 200D 1F468 ; RGI_Emoji_ZWJ_Sequence ; couple # E2.0
not a record
# Date: 2023-01-01
";
        let lines: Vec<Line> = LineParser::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::Date("2022-08-12, 20:24:39 GMT".into()));
        match lines[1] {
            Line::Record(ref rec) => {
                let cps = rec.codepoints.to_string();
                assert_eq!(cps, "1F468 200D 2764 FE0F 200D 1F468");
            }
            ref line => panic!("expected a record, got {:?}", line),
        }
        assert_eq!(lines[2], Line::Date("2023-01-01".into()));
    }

    #[test]
    fn line_parser_reports_location() {
        let data = "# header\n\n1F600 ; Basic_Emoji\nZZZZ ; Basic_Emoji\n";
        let err = LineParser::new(Cursor::new(data))
            .collect::<Result<Vec<Line>, _>>()
            .unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(!err.is_io_error());
    }

    #[test]
    fn checked_in_data() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
        let date = emoji_data_date(&dir).unwrap();
        assert_eq!(date.as_deref(), Some("2023-06-05, 20:04:50 GMT"));

        for file in SequenceFile::ALL.iter() {
            let records = file
                .from_dir(&dir)
                .unwrap()
                .filter(|line| match *line {
                    Ok(Line::Record(_)) => true,
                    _ => false,
                })
                .count();
            assert!(records > 0, "{:?}", file);
        }
    }
}
