//! Typed error definitions for appendfilename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppendFilenameError {
    #[error("--verbose and --quiet given together")]
    VerbosityConflict,

    #[error("no input files given")]
    NoInputFiles,

    #[error("--prepend and --smart-prepend given together")]
    ModeConflict,

    #[error("{count} error(s) occurred, check the output above")]
    FilesFailed { count: u32 },

    #[error("Not an existing file: {0}")]
    NotAFile(PathBuf),

    #[error("Broken symbolic link: {0}")]
    BrokenSymlink(PathBuf),

    #[error("Could not decompose the file name of: {0}")]
    InvalidFileName(PathBuf),

    #[error("Rename of {from} to {to} failed: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppendFilenameError {
    /// Process exit code. Conflicting flags get their own codes so callers
    /// can tell a bad invocation from failed renames; every per-file failure
    /// surfaces as `FilesFailed` after the whole batch was attempted.
    pub fn code(&self) -> i32 {
        match self {
            Self::VerbosityConflict => 1,
            Self::NoInputFiles => 2,
            Self::ModeConflict => 3,
            Self::FilesFailed { .. } => 4,
            Self::NotAFile(_)
            | Self::BrokenSymlink(_)
            | Self::InvalidFileName(_)
            | Self::RenameFailed { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_config_error() {
        assert_eq!(AppendFilenameError::VerbosityConflict.code(), 1);
        assert_eq!(AppendFilenameError::NoInputFiles.code(), 2);
        assert_eq!(AppendFilenameError::ModeConflict.code(), 3);
        assert_eq!(AppendFilenameError::FilesFailed { count: 2 }.code(), 4);
    }
}
