//! Building the new file name for a chosen insertion mode.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::split::split_file_name;

/// Default separator placed between the old name and the inserted text.
pub const DEFAULT_TEXT_SEPARATOR: &str = " ";

/// Where the text is inserted relative to the existing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Between base name and tag block / extension.
    #[default]
    Append,
    /// In front of the whole name.
    Prepend,
    /// In front of the name, but after a leading date/time-stamp.
    SmartPrepend,
}

/// Immutable per-invocation settings consumed by the renamer.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub text: String,
    pub mode: Mode,
    pub separator: String,
    pub dryrun: bool,
}

impl RenameOptions {
    pub fn new(text: impl Into<String>, mode: Mode) -> Self {
        Self {
            text: text.into(),
            mode,
            separator: DEFAULT_TEXT_SEPARATOR.to_string(),
            dryrun: false,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn dryrun(mut self, dryrun: bool) -> Self {
        self.dryrun = dryrun;
        self
    }
}

/// A leading date/time-stamp and the remainder of the name behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampMatch<'a> {
    pub stamp: &'a str,
    pub rest: &'a str,
}

// Recognized stamps: `YYYY-MM-DD`, optionally followed by `Thh.mm` or
// `Thh.mm.ss` (the `T` may also be a space, `:`, `_` or `-`; the intra-time
// separator may be `:`, `.` or `-`), then one of `- _.` before the rest.
// Greedy groups ordered most-specific-first, so the longest valid stamp wins.
// Compact, month and short stamp forms are intentionally not recognized;
// they fall through to the plain-prepend path instead of being mis-parsed.
static STAMP_PATTERN: OnceLock<Regex> = OnceLock::new();

fn stamp_pattern() -> &'static Regex {
    STAMP_PATTERN.get_or_init(|| {
        Regex::new(
            r"^(\d{4}-[01]\d-[0-3]\d(?:[T :_-][0-2]\d[:.-][0-5]\d(?:[:.-][0-5]\d)?)?)[- _.](.+)$",
        )
        .expect("stamp pattern is valid")
    })
}

/// Extract a leading date/time-stamp from `name`, if one is present.
pub fn match_timestamp(name: &str) -> Option<TimestampMatch<'_>> {
    let caps = stamp_pattern().captures(name)?;
    Some(TimestampMatch {
        stamp: caps.get(1)?.as_str(),
        rest: caps.get(2)?.as_str(),
    })
}

/// Compute the new file name for `name` under the chosen mode.
///
/// The tag block and extension survive verbatim in append and prepend mode.
/// Smart-prepend keeps a recognized leading stamp in front of the text and
/// otherwise behaves exactly like prepend. Callers must not pass empty text;
/// resolving the text (flag or prompt) happens upstream.
pub fn build_new_name(name: &str, options: &RenameOptions) -> String {
    let parts = split_file_name(name);
    let sep = &options.separator;
    let text = &options.text;

    match options.mode {
        Mode::Append => format!(
            "{}{sep}{text}{}",
            parts.base, parts.tag_suffix_and_extension
        ),
        Mode::Prepend => format!(
            "{text}{sep}{}{}",
            parts.base, parts.tag_suffix_and_extension
        ),
        Mode::SmartPrepend => match match_timestamp(name) {
            Some(m) => {
                debug!(stamp = m.stamp, "keeping leading date/time-stamp in place");
                format!("{}{sep}{text}{sep}{}", m.stamp, m.rest)
            }
            None => {
                debug!("no date/time-stamp found, doing a plain prepend");
                format!(
                    "{text}{sep}{}{}",
                    parts.base, parts.tag_suffix_and_extension
                )
            }
        },
    }
}
