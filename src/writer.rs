use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use emoji_trie::SequenceSet;
use fst::raw::Fst;
use fst::{Set, SetBuilder};

use crate::error::Result;

#[derive(Clone, Debug)]
pub struct WriterBuilder(WriterOptions);

#[derive(Clone, Debug)]
struct WriterOptions {
    name: String,
    columns: u64,
    char_literals: bool,
    fst_dir: Option<PathBuf>,
}

impl WriterBuilder {
    /// Create a new builder for emoji table writers.
    ///
    /// The name given corresponds to the Rust module name to use when
    /// applicable.
    pub fn new(name: &str) -> WriterBuilder {
        WriterBuilder(WriterOptions {
            name: name.to_string(),
            columns: 79,
            char_literals: false,
            fst_dir: None,
        })
    }

    /// Create a new writer from this builder's configuration.
    pub fn from_writer<W: io::Write + 'static>(&self, wtr: W) -> Writer {
        Writer {
            wtr: LineWriter::new(Box::new(wtr), self.0.columns as usize),
            wrote_header: false,
            opts: self.0.clone(),
        }
    }

    /// Create a new writer that writes to stdout.
    pub fn from_stdout(&self) -> Writer {
        self.from_writer(io::stdout())
    }

    /// Create a new writer that writes FSTs to a directory.
    pub fn from_fst_dir<P: AsRef<Path>>(&self, fst_dir: P) -> Result<Writer> {
        let mut opts = self.0.clone();
        opts.fst_dir = Some(fst_dir.as_ref().to_path_buf());
        let mut fpath = fst_dir.as_ref().join(rust_module_name(&opts.name));
        fpath.set_extension("rs");
        Ok(Writer {
            wtr: LineWriter::new(
                Box::new(File::create(fpath)?),
                opts.columns as usize,
            ),
            wrote_header: false,
            opts,
        })
    }

    /// Set the column limit to use when writing Rust source code.
    ///
    /// Note that this is adhered to on a "best effort" basis.
    pub fn columns(&mut self, columns: u64) -> &mut WriterBuilder {
        self.0.columns = columns;
        self
    }

    /// When printing Rust source code, emit `char` literals instead of `u32`
    /// literals.
    pub fn char_literals(&mut self, yes: bool) -> &mut WriterBuilder {
        self.0.char_literals = yes;
        self
    }
}

/// A writer of emoji sequence tables.
///
/// A writer takes a set of emoji sequences and writes it either as Rust
/// source code or as an FST.
pub struct Writer {
    wtr: LineWriter<Box<dyn io::Write + 'static>>,
    wrote_header: bool,
    opts: WriterOptions,
}

impl Writer {
    /// Write the version of the emoji data that a table was generated from.
    pub fn emoji_date(&mut self, name: &str, date: &str) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(name);
        writeln!(
            self.wtr,
            "pub const {}: &'static str = \"{}\";",
            name,
            date.escape_default(),
        )?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Write every sequence in the given set.
    ///
    /// When the output format is Rust source code, then a slice of
    /// `(sequence, label)` pairs is emitted in ascending codepoint order.
    /// Loading these pairs back into a `SequenceSet` reproduces the given
    /// set.
    ///
    /// When the output format is an FST, then the FST is a set whose keys are
    /// the UTF-8 encodings of each sequence. Labels are not included.
    pub fn sequences(&mut self, name: &str, set: &SequenceSet) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(name);
        if self.opts.fst_dir.is_some() {
            let mut builder = SetBuilder::memory();
            let mut key = String::new();
            for (seq, _) in set.iter() {
                key.clear();
                key.extend(seq.iter());
                builder.insert(key.as_bytes())?;
            }
            let set = Set::from_bytes(builder.into_inner()?)?;
            self.fst(&name, set.as_fst())?;
        } else {
            self.sequences_slice(&name, set)?;
        }
        self.wtr.flush()?;
        Ok(())
    }

    fn sequences_slice(
        &mut self,
        name: &str,
        set: &SequenceSet,
    ) -> Result<()> {
        let ty = self.rust_codepoint_type();
        writeln!(
            self.wtr,
            "pub const {}: &'static [(&'static [{}], &'static str)] = &[",
            name, ty,
        )?;
        for (seq, label) in set.iter() {
            let cps: Vec<String> =
                seq.iter().map(|&cp| self.rust_codepoint(cp)).collect();
            self.wtr.write_str(&format!(
                "(&[{}], \"{}\"), ",
                cps.join(", "),
                label.unwrap_or("").escape_default(),
            ))?;
        }
        writeln!(self.wtr, "];")?;
        Ok(())
    }

    fn fst(&mut self, const_name: &str, fst: &Fst) -> Result<()> {
        let fst_dir = match self.opts.fst_dir {
            Some(ref fst_dir) => fst_dir,
            None => return err!("no directory given for {} FST", const_name),
        };
        let fst_file_name = format!("{}.fst", rust_module_name(const_name));
        let fst_file_path = fst_dir.join(&fst_file_name);
        File::create(fst_file_path)?.write_all(&fst.to_vec())?;

        writeln!(
            self.wtr,
            "pub static {}: ::once_cell::sync::Lazy<::fst::Set> =",
            const_name,
        )?;
        writeln!(self.wtr, "  ::once_cell::sync::Lazy::new(|| {{")?;
        writeln!(
            self.wtr,
            "    ::fst::Set::from(::fst::raw::Fst::from_static_slice("
        )?;
        writeln!(
            self.wtr,
            "      include_bytes!({:?})).unwrap())",
            fst_file_name
        )?;
        writeln!(self.wtr, "  }});")?;
        Ok(())
    }

    fn header(&mut self) -> Result<()> {
        if self.wrote_header {
            return Ok(());
        }
        self.wrote_header = true;
        let mut argv = vec![];
        argv.push(
            env::current_exe()?
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "emoji-generate".to_string()),
        );
        for arg in env::args_os().skip(1) {
            let x = arg.to_string_lossy();
            if x.contains("\n") {
                argv.push("[snip (arg too long)]".to_string());
            } else {
                argv.push(x.into_owned());
            }
        }
        writeln!(
            self.wtr,
            "/* DO NOT EDIT THIS FILE. \
             IT WAS AUTOMATICALLY GENERATED BY:"
        )?;
        writeln!(self.wtr, " *")?;
        writeln!(self.wtr, " *  {}", argv.join(" "))?;
        writeln!(self.wtr, " *")?;
        writeln!(self.wtr, " * emoji-generate is available on crates.io.")?;
        writeln!(self.wtr, " */")?;
        Ok(())
    }

    fn separator(&mut self) -> Result<()> {
        write!(self.wtr, "\n")?;
        Ok(())
    }

    /// Return valid Rust source code that represents the given codepoint.
    ///
    /// The source code returned is either a u32 literal or a char literal,
    /// depending on the configuration. Char literals always use the
    /// `\u{...}` escape, since many of the codepoints in emoji sequences
    /// (selectors, joiners, tags) are invisible.
    fn rust_codepoint(&self, cp: char) -> String {
        if self.opts.char_literals {
            format!("'{}'", cp.escape_unicode())
        } else {
            (cp as u32).to_string()
        }
    }

    /// Return valid Rust source code indicating the type of the codepoint
    /// that we emit based on this writer's configuration.
    fn rust_codepoint_type(&self) -> &'static str {
        if self.opts.char_literals {
            "char"
        } else {
            "u32"
        }
    }
}

#[derive(Debug)]
struct LineWriter<W> {
    wtr: W,
    line: String,
    columns: usize,
    indent: String,
}

impl<W: io::Write> LineWriter<W> {
    fn new(wtr: W, columns: usize) -> LineWriter<W> {
        LineWriter {
            wtr,
            line: String::new(),
            columns,
            indent: "  ".to_string(),
        }
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        if self.line.len() + s.len() > self.columns {
            self.flush_line()?;
        }
        if self.line.is_empty() {
            self.line.push_str(&self.indent);
        }
        self.line.push_str(s);
        Ok(())
    }

    fn flush_line(&mut self) -> io::Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }
        self.wtr.write_all(self.line.trim_end().as_bytes())?;
        self.wtr.write_all(b"\n")?;
        self.line.clear();
        Ok(())
    }
}

impl<W: io::Write> io::Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.flush_line()?;
        self.wtr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_line()?;
        self.wtr.flush()
    }
}

/// Heuristically produce an appropriate constant Rust name.
fn rust_const_name(s: &str) -> String {
    let mut s = s.replace('-', "_");
    s.make_ascii_uppercase();
    s
}

/// Heuristically produce an appropriate module Rust name.
fn rust_module_name(s: &str) -> String {
    let mut s = s.replace('-', "_");
    s.make_ascii_lowercase();
    s
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::io::{self, Write};
    use std::rc::Rc;

    use emoji_trie::SequenceSet;

    use super::{rust_const_name, LineWriter, WriterBuilder};

    /// A writer whose contents remain reachable after it has been boxed.
    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl io::Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn keycap_set() -> SequenceSet {
        let mut set = SequenceSet::new();
        set.add_sequence(&['\u{2764}'], "Basic_Emoji ==> \u{2764}");
        set.add_sequence(&['#', '\u{FE0F}', '\u{20E3}'], "keycap");
        set
    }

    #[test]
    fn sequences_as_chars() {
        let out = Shared::default();
        let mut wtr = WriterBuilder::new("emoji_sequences")
            .char_literals(true)
            .from_writer(out.clone());
        wtr.sequences("emoji_sequences", &keycap_set()).unwrap();

        let got = out.contents();
        assert!(got.starts_with("/* DO NOT EDIT THIS FILE."));
        assert!(got.contains(
            "pub const EMOJI_SEQUENCES: \
             &'static [(&'static [char], &'static str)] = &[\n"
        ));
        assert!(got.contains(
            "  (&['\\u{23}', '\\u{fe0f}', '\\u{20e3}'], \"keycap\"),\n"
        ));
        assert!(got.contains(
            "  (&['\\u{2764}'], \"Basic_Emoji ==> \\u{2764}\"),\n"
        ));
        assert!(got.ends_with("];\n"));
        // Sequences are written in codepoint order.
        assert!(got.find("keycap").unwrap() < got.find("Basic").unwrap());
    }

    #[test]
    fn sequences_as_integers() {
        let out = Shared::default();
        let mut wtr =
            WriterBuilder::new("emoji_sequences").from_writer(out.clone());
        wtr.emoji_date("unicode_emoji_date", "2023-02-01").unwrap();
        wtr.sequences("emoji_sequences", &keycap_set()).unwrap();

        let got = out.contents();
        assert_eq!(got.matches("DO NOT EDIT").count(), 1);
        assert!(got.contains(
            "pub const UNICODE_EMOJI_DATE: &'static str = \"2023-02-01\";\n"
        ));
        assert!(got.contains("&'static [(&'static [u32], &'static str)]"));
        assert!(got.contains("(&[35, 65039, 8419], \"keycap\"), "));
    }

    #[test]
    fn sequences_as_fst() {
        let dir = tempfile::tempdir().unwrap();
        let set = keycap_set();
        let mut wtr = WriterBuilder::new("emoji_sequences")
            .from_fst_dir(dir.path())
            .unwrap();
        wtr.emoji_date("unicode_emoji_date", "2023-02-01").unwrap();
        wtr.sequences("emoji_sequences", &set).unwrap();

        let bytes = fs::read(dir.path().join("emoji_sequences.fst")).unwrap();
        let fst = fst::Set::from_bytes(bytes).unwrap();
        assert_eq!(fst.len(), set.len());
        for (seq, _) in set.iter() {
            let key: String = seq.iter().collect();
            assert!(fst.contains(key.as_bytes()), "{:?}", seq);
        }
        assert!(!fst.contains("#".as_bytes()));

        let src =
            fs::read_to_string(dir.path().join("emoji_sequences.rs")).unwrap();
        assert!(src.contains("pub const UNICODE_EMOJI_DATE"));
        assert!(src.contains(
            "pub static EMOJI_SEQUENCES: \
             ::once_cell::sync::Lazy<::fst::Set> =\n"
        ));
        assert!(src.contains("include_bytes!(\"emoji_sequences.fst\")"));
    }

    #[test]
    fn line_wrapping() {
        let mut buf = vec![];
        {
            let mut wtr = LineWriter::new(&mut buf, 10);
            wtr.write_str("abcd, ").unwrap();
            wtr.write_str("efgh, ").unwrap();
            wtr.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "  abcd,\n  efgh,\n");
    }

    #[test]
    fn const_names() {
        assert_eq!(rust_const_name("emoji_sequences"), "EMOJI_SEQUENCES");
        assert_eq!(rust_const_name("emoji-sequences"), "EMOJI_SEQUENCES");
    }
}
