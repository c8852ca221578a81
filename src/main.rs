use std::process;

use crate::args::ArgMatches;
use crate::error::Result;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::Other(format!($($tt)*)))
    }
}

mod app;
mod args;
mod error;
mod logger;
mod writer;

mod sequences;

fn main() {
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = app::app().get_matches();
    let mut verbosity = matches.occurrences_of("verbose");
    if let (_, Some(m)) = matches.subcommand() {
        verbosity = verbosity.max(m.occurrences_of("verbose"));
    }
    logger::init(verbosity);

    match matches.subcommand() {
        ("sequences", Some(m)) => sequences::command(ArgMatches::new(m)),
        ("test-emoji-sequences", Some(m)) => {
            sequences::command_test(ArgMatches::new(m))
        }
        ("", _) => {
            app::app().print_help()?;
            println!("");
            Ok(())
        }
        (unknown, _) => err!("unrecognized command: {}", unknown),
    }
}
