// Generated by running emoji-generate on the files in data/. Regenerate with:
//
//   emoji-generate sequences data --chars > emoji-scan/src/tables/emoji_sequences.rs

#[allow(missing_docs)]
#[rustfmt::skip]
pub mod emoji_sequences;
