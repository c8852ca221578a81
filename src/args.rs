use std::ffi::OsStr;
use std::ops;

use crate::error::Result;
use crate::writer::{Writer, WriterBuilder};

/// Wraps clap matches and provides convenient accessors to various parts of
/// the underlying matches.
#[derive(Clone, Copy)]
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ops::Deref for ArgMatches<'a> {
    type Target = clap::ArgMatches<'a>;
    fn deref(&self) -> &clap::ArgMatches<'a> {
        self.0
    }
}

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    /// Return the directory containing the emoji sequence data files.
    pub fn emoji_dir(&self) -> Result<&'a OsStr> {
        match self.0.value_of_os("emoji-dir") {
            Some(x) => Ok(x),
            None => err!("missing emoji data directory"),
        }
    }

    /// Return the name of the table to emit.
    pub fn name(&self) -> &'a str {
        self.0.value_of("name").unwrap_or("EMOJI_SEQUENCES")
    }

    /// Create a new writer for the table with the given module name, as
    /// configured by the output flags.
    pub fn writer(&self, name: &str) -> Result<Writer> {
        let mut builder = WriterBuilder::new(name);
        builder.columns(79).char_literals(self.is_present("chars"));
        match self.value_of_os("fst-dir") {
            None => Ok(builder.from_stdout()),
            Some(x) => builder.from_fst_dir(x),
        }
    }
}
