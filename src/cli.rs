//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The prepend/smart-prepend and verbose/quiet conflicts are checked in
//!   app::run instead of via clap, so each maps to its own exit code.
//! - --separator changes only the text separator; the " -- " tag separator
//!   is fixed.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::rename::Mode;

/// Insert text between a file name and its extension or tag suffix.
///
/// By default the text lands between the base name and the extension (or,
/// when present, before the " -- <tags>" block):
///   appendfilename --text="of projectA" "the presentation.pptx"
///       -> "the presentation of projectA.pptx"
/// Without --text the text is asked for interactively. Renaming a symbolic
/// link whose target carries the same file name renames the target as well.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Insert text between a file name and its extension or tag suffix"
)]
pub struct Args {
    /// Files to rename, processed one at a time in the given order.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// The text to add to the file name; asked for interactively if absent.
    #[arg(short = 't', long, value_name = "TEXT", help = "The text to add to the file name")]
    pub text: Option<String>,

    /// Do the opposite: put the text in front of the name instead of
    /// appending it.
    #[arg(short = 'p', long, help = "Prepend the text instead of appending it")]
    pub prepend: bool,

    /// Like --prepend but keep a leading "YYYY-MM-DD(Thh.mm(.ss))" stamp in
    /// front of the inserted text.
    #[arg(
        long,
        help = "Like --prepend but insert the text after a leading date/time-stamp"
    )]
    pub smart_prepend: bool,

    /// Separator between the old file name and the inserted text.
    #[arg(
        long,
        value_name = "STRING",
        default_value = crate::rename::DEFAULT_TEXT_SEPARATOR,
        help = "Separator between old file name and inserted text"
    )]
    pub separator: String,

    /// Dry-run: log what would happen but do not modify any file.
    #[arg(
        short = 'd',
        long,
        help = "Show what would be done, but do not modify files"
    )]
    pub dryrun: bool,

    /// Enable debug logging.
    #[arg(short = 'v', long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short = 'q', long, help = "Only log errors")]
    pub quiet: bool,
}

impl Args {
    /// Insertion mode selected by the flags. Conflicting flags are rejected
    /// in app::run before this is consulted.
    pub fn mode(&self) -> Mode {
        if self.prepend {
            Mode::Prepend
        } else if self.smart_prepend {
            Mode::SmartPrepend
        } else {
            Mode::Append
        }
    }

    /// Effective console verbosity. The conflicting combination of both
    /// flags never reaches this; app::run exits on it first.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else if self.quiet {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_append() {
        let args = Args::parse_from(["appendfilename", "a.txt"]);
        assert_eq!(args.mode(), Mode::Append);
        assert_eq!(args.separator, " ");
    }

    #[test]
    fn prepend_flags_select_modes() {
        let args = Args::parse_from(["appendfilename", "-p", "a.txt"]);
        assert_eq!(args.mode(), Mode::Prepend);
        let args = Args::parse_from(["appendfilename", "--smart-prepend", "a.txt"]);
        assert_eq!(args.mode(), Mode::SmartPrepend);
    }

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["appendfilename", "-v", "a.txt"]);
        assert_eq!(args.effective_log_level(), LogLevel::Debug);
        let args = Args::parse_from(["appendfilename", "-q", "a.txt"]);
        assert_eq!(args.effective_log_level(), LogLevel::Quiet);
        let args = Args::parse_from(["appendfilename", "a.txt"]);
        assert_eq!(args.effective_log_level(), LogLevel::Normal);
    }

    #[test]
    fn separator_override() {
        let args = Args::parse_from(["appendfilename", "--separator", "_", "a.txt"]);
        assert_eq!(args.separator, "_");
    }
}
