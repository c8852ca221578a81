use std::io::{self, Write};
use std::path::Path;

use emoji_parse::{Codepoints, EmojiSequence, Line, SequenceFile};
use emoji_trie::SequenceSet;

use crate::args::ArgMatches;
use crate::error::Result;

/// VARIATION SELECTOR-15, which requests the text presentation of the
/// character before it.
const TEXT_PRESENTATION: char = '\u{FE0E}';

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.emoji_dir()?;
    let records = Records::from_dir(dir)?;
    let set = records.to_set();
    tracing::info!(
        records = records.len(),
        sequences = set.len(),
        "expanded emoji sequence data",
    );

    let mut wtr = args.writer("emoji_sequences")?;
    let date = records.date().unwrap_or("");
    wtr.emoji_date("UNICODE_EMOJI_DATE", date)?;
    wtr.sequences(args.name(), &set)?;
    Ok(())
}

pub fn command_test(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.emoji_dir()?;
    let mut stdout = io::stdout();
    for file in SequenceFile::ALL.iter() {
        for result in file.from_dir(dir)? {
            match result? {
                Line::Date(date) => writeln!(stdout, "# Date: {}", date)?,
                Line::Record(row) => writeln!(stdout, "{}", row)?,
                _ => {}
            }
        }
    }
    Ok(())
}

/// A single emoji sequence produced by expanding a record, along with a
/// comment saying where it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Record {
    seq: Vec<char>,
    comment: String,
}

/// Every sequence found in a set of emoji data files, in the order in which
/// they were found.
#[derive(Debug, Default)]
struct Records {
    date: Option<String>,
    records: Vec<Record>,
}

impl Records {
    /// Read and expand every sequence file in the given emoji data
    /// directory.
    fn from_dir<P: AsRef<Path>>(emoji_dir: P) -> Result<Records> {
        let mut records = Records::default();
        for file in SequenceFile::ALL.iter() {
            let path = file.file_path(&emoji_dir);
            tracing::info!(path = %path.display(), "reading emoji data");
            for result in file.from_dir(&emoji_dir)? {
                records.add_line(result?);
            }
        }
        Ok(records)
    }

    fn add_line(&mut self, line: Line) {
        match line {
            Line::Date(date) => self.date = Some(date),
            Line::Record(row) => self.add_row(&row),
            Line::Blank | Line::Comment | Line::Skipped => {}
        }
    }

    /// Expand a single record into the sequences it describes.
    ///
    /// Every codepoint in a range is emitted both on its own and followed by
    /// U+FE0E. The same goes for a sequence of exactly one codepoint. Longer
    /// sequences are emitted exactly as written.
    fn add_row(&mut self, row: &EmojiSequence) {
        match row.codepoints {
            Codepoints::Range(ref range) => {
                for cp in range.iter() {
                    let comment = format!("{} ==> {}", row.type_field, cp);
                    self.push(vec![cp], comment.clone());
                    self.push(vec![cp, TEXT_PRESENTATION], comment);
                }
            }
            Codepoints::Sequence(ref seq) => {
                let rendered: String = seq.iter().collect();
                let comment = format!("{} ==> {}", row.type_field, rendered);
                if let [cp] = seq[..] {
                    self.push(vec![cp], comment.clone());
                    self.push(vec![cp, TEXT_PRESENTATION], comment);
                } else {
                    self.push(seq.clone(), comment);
                }
            }
        }
    }

    fn push(&mut self, seq: Vec<char>, comment: String) {
        if seq.is_empty() {
            return;
        }
        tracing::debug!("add record: {:?}, {}", seq, comment);
        self.records.push(Record { seq, comment });
    }

    /// Insert every record into a fresh set.
    fn to_set(&self) -> SequenceSet {
        let mut set = SequenceSet::new();
        for rec in &self.records {
            set.add_sequence(&rec.seq, rec.comment.clone());
        }
        set
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use emoji_parse::Line;

    use super::{Records, TEXT_PRESENTATION};

    fn records(lines: &[&str]) -> Records {
        let mut records = Records::default();
        for line in lines {
            records.add_line(Line::parse(line).unwrap());
        }
        records
    }

    fn seqs(records: &Records) -> Vec<Vec<char>> {
        records.records.iter().map(|rec| rec.seq.clone()).collect()
    }

    #[test]
    fn range_expands_with_text_presentation() {
        let records = records(&["0041..0043 ; Basic_Emoji # test"]);
        assert_eq!(
            seqs(&records),
            vec![
                vec!['A'],
                vec!['A', '\u{FE0E}'],
                vec!['B'],
                vec!['B', '\u{FE0E}'],
                vec!['C'],
                vec!['C', '\u{FE0E}'],
            ]
        );
        assert_eq!(records.records[0].comment, "Basic_Emoji ==> A");
        assert_eq!(records.records[1].comment, "Basic_Emoji ==> A");
    }

    #[test]
    fn zwj_sequence_is_not_expanded() {
        let records = records(&[
            "1F468 200D 2764 FE0F 200D 1F468 ; RGI_Emoji_ZWJ_Sequence # couple",
        ]);
        assert_eq!(
            seqs(&records),
            vec![vec![
                '\u{1F468}',
                '\u{200D}',
                '\u{2764}',
                '\u{FE0F}',
                '\u{200D}',
                '\u{1F468}',
            ]]
        );
    }

    #[test]
    fn single_codepoint_sequence_gets_text_presentation() {
        let records = records(&["1F004 ; Basic_Emoji ; mahjong red dragon"]);
        assert_eq!(
            seqs(&records),
            vec![vec!['\u{1F004}'], vec!['\u{1F004}', TEXT_PRESENTATION]]
        );
    }

    #[test]
    fn presentation_sequence_is_kept_as_is() {
        let records =
            records(&["00A9 FE0F ; Basic_Emoji ; copyright # E0.6 [1] (©️)"]);
        assert_eq!(seqs(&records), vec![vec!['\u{A9}', '\u{FE0F}']]);
    }

    #[test]
    fn comments_and_dates() {
        let records = records(&[
            "# emoji-sequences.txt",
            "# Date: 2022-08-12, 20:24:39 GMT",
            "",
            "231A..231B ; Basic_Emoji ; watch..hourglass done",
            "# Date: 2023-02-01, 02:22:54 GMT",
            "no fields here",
        ]);
        assert_eq!(records.date(), Some("2023-02-01, 02:22:54 GMT"));
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn records_preserve_order_and_set_dedups() {
        let records = records(&[
            "1F1FA 1F1F8 ; RGI_Emoji_Flag_Sequence ; flag: United States",
            "2764 ; Basic_Emoji ; red heart",
            "2764..2764 ; Basic_Emoji ; red heart",
        ]);
        assert_eq!(records.len(), 5);
        assert_eq!(records.records[0].seq, vec!['\u{1F1FA}', '\u{1F1F8}']);

        let set = records.to_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&['\u{2764}']));
        assert!(set.contains(&['\u{2764}', TEXT_PRESENTATION]));
        assert_eq!(
            set.has_emoji_prefix("\u{2764}\u{FE0E}".as_bytes()),
            Some(6)
        );
    }

    #[test]
    fn from_dir_reads_basic_file_before_zwj_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("emoji-sequences.txt"),
            "# Date: 2023-01-01, 00:00:00 GMT\n\
             1F600 ; Basic_Emoji ; grinning face\n\
             2764 FE0F ; Basic_Emoji ; red heart\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("emoji-zwj-sequences.txt"),
            "# Date: 2023-02-02, 00:00:00 GMT\n\
             2764 FE0F ; RGI_Emoji_ZWJ_Sequence ; red heart again\n\
             1F468 200D 1F469 ; RGI_Emoji_ZWJ_Sequence ; pair\n",
        )
        .unwrap();

        let records = Records::from_dir(dir.path()).unwrap();
        assert_eq!(records.date(), Some("2023-02-02, 00:00:00 GMT"));
        assert_eq!(
            seqs(&records),
            vec![
                vec!['\u{1F600}'],
                vec!['\u{1F600}', TEXT_PRESENTATION],
                vec!['\u{2764}', '\u{FE0F}'],
                vec!['\u{2764}', '\u{FE0F}'],
                vec!['\u{1F468}', '\u{200D}', '\u{1F469}'],
            ]
        );
        assert_eq!(
            records.records[2].comment,
            "Basic_Emoji ==> \u{2764}\u{FE0F}"
        );

        let set = records.to_set();
        assert_eq!(set.len(), 4);
        assert_eq!(
            set.label(&['\u{2764}', '\u{FE0F}']),
            Some("RGI_Emoji_ZWJ_Sequence ==> \u{2764}\u{FE0F}")
        );
    }

    #[test]
    fn from_dir_fails_on_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Records::from_dir(dir.path().join("nowhere")).is_err());

        fs::write(
            dir.path().join("emoji-sequences.txt"),
            "1F600 ; Basic_Emoji ; grinning face\n",
        )
        .unwrap();
        assert!(Records::from_dir(dir.path()).is_err());
    }

    #[test]
    fn from_dir_fails_on_bad_codepoint() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("emoji-sequences.txt"), "ZZZZ ; Basic\n")
            .unwrap();
        fs::write(dir.path().join("emoji-zwj-sequences.txt"), "").unwrap();
        let err = Records::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("emoji-sequences.txt:1:"));
    }
}
