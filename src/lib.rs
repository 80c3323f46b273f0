//! Core library for `appendfilename`.
//!
//! Inserts text between a file name and its optional `" -- <tags>"` block or
//! extension, with three insertion modes:
//!
//! - append (default): `report.pptx` + "of projectA" -> `report of projectA.pptx`
//! - prepend: `the presentation.pptx` -> `of projectA the presentation.pptx`
//! - smart-prepend: keeps a leading date/time-stamp in front, so
//!   `2021-12-31T18.48.22_test.txt` + "book" -> `2021-12-31T18.48.22 book test.txt`
//!
//! A symbolic link whose target carries the same file name is followed: the
//! target is renamed with the same settings and the link is re-pointed.
//! Everything is synchronous and files are processed one at a time; the only
//! state shared across a batch is the running error count.

pub mod app;
pub mod cli;
pub mod errors;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod rename;
pub mod shutdown;
pub mod vocab;

pub use errors::AppendFilenameError;
pub use logging::LogLevel;
pub use rename::{
    build_new_name, match_timestamp, rename_file, rename_with_symlink_propagation,
    split_file_name, FileNameParts, Mode, RenameOptions, RenameOutcome, TimestampMatch,
    DEFAULT_TEXT_SEPARATOR, FILENAME_TAG_SEPARATOR,
};
