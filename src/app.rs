use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
emoji-generate is a tool that generates Rust source files containing tables
of Unicode emoji sequences.

The tables are built from the emoji-sequences.txt and emoji-zwj-sequences.txt
files published at https://www.unicode.org/Public/emoji/. Every range in those
files is expanded into its individual codepoints, and every single codepoint
emoji is also listed with a trailing text presentation selector (U+FE0E), so
that the emitted table contains every sequence a matcher needs to recognize.

Project home page: https://github.com/BurntSushi/ucd-generate";

const ABOUT_SEQUENCES: &'static str = "\
sequences emits a table of every emoji sequence found in the emoji data
directory given. Each entry pairs a sequence of codepoints with a label that
names the type of sequence it came from.

The table is a sorted slice of (sequence, label) pairs, preceded by a constant
holding the date of the emoji data. Loading every sequence in the slice into
an emoji_trie::SequenceSet produces a set that can find the longest emoji at
any position in a string.

When emitted as an FST, the FST is a set whose keys are the UTF-8 encodings of
each sequence.
";

const ABOUT_TEST_EMOJI_SEQUENCES: &'static str = "\
test-emoji-sequences parses the emoji-sequences.txt and
emoji-zwj-sequences.txt files and emits every record on stdout in a canonical
form. The purpose of this command is to compare the output with the input and
confirm that the parser understood every line.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    // Various common flags and arguments.
    let flag_name = |default| {
        Arg::with_name("name")
            .long("name")
            .help("Set the name of the table in the emitted code.")
            .takes_value(true)
            .default_value(default)
    };
    let flag_chars = Arg::with_name("chars")
        .long("chars")
        .help("Write codepoints as character literals.");
    let flag_fst_dir = Arg::with_name("fst-dir")
        .long("fst-dir")
        .help("Emit the table as a FST in Rust source code.")
        .takes_value(true);
    let emoji_dir = Arg::with_name("emoji-dir").required(true).help(
        "Directory containing emoji-sequences.txt and \
         emoji-zwj-sequences.txt.",
    );
    let flag_verbose = Arg::with_name("verbose")
        .short("v")
        .long("verbose")
        .multiple(true)
        .global(true)
        .help(
            "Log progress to stderr. Repeat for more detail. RUST_LOG, when \
             set, overrides this flag.",
        );

    // Subcommands.
    let cmd_sequences = SubCommand::with_name("sequences")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the table of all emoji sequences.")
        .before_help(ABOUT_SEQUENCES)
        .arg(emoji_dir.clone())
        .arg(flag_fst_dir)
        .arg(flag_name("EMOJI_SEQUENCES"))
        .arg(flag_chars);
    let cmd_test_emoji_sequences =
        SubCommand::with_name("test-emoji-sequences")
            .author(clap::crate_authors!())
            .version(clap::crate_version!())
            .template(TEMPLATE_SUB)
            .about("Test the emoji sequence data parser.")
            .before_help(ABOUT_TEST_EMOJI_SEQUENCES)
            .arg(emoji_dir);

    // The actual App.
    App::new("emoji-generate")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .arg(flag_verbose)
        .subcommand(cmd_sequences)
        .subcommand(cmd_test_emoji_sequences)
}

#[cfg(test)]
mod tests {
    use super::app;

    #[test]
    fn sequences_defaults() {
        let matches = app()
            .get_matches_from_safe(vec!["emoji-generate", "sequences", "data"])
            .unwrap();
        let (name, sub) = matches.subcommand();
        let sub = sub.unwrap();
        assert_eq!(name, "sequences");
        assert_eq!(sub.value_of("emoji-dir"), Some("data"));
        assert_eq!(sub.value_of("name"), Some("EMOJI_SEQUENCES"));
        assert!(!sub.is_present("chars"));
        assert!(!sub.is_present("fst-dir"));
    }

    #[test]
    fn sequences_flags() {
        let matches = app()
            .get_matches_from_safe(vec![
                "emoji-generate",
                "sequences",
                "data",
                "--chars",
                "--name",
                "ALL",
                "-vv",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("sequences").unwrap();
        assert!(sub.is_present("chars"));
        assert_eq!(sub.value_of("name"), Some("ALL"));
        assert_eq!(sub.occurrences_of("verbose"), 2);
    }

    #[test]
    fn missing_emoji_dir() {
        let result =
            app().get_matches_from_safe(vec!["emoji-generate", "sequences"]);
        assert!(result.is_err());
    }
}
