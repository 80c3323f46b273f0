//! The renamer: name decomposition, insertion modes, and the filesystem
//! rename itself, including symlink-aware dual renaming.

mod compose;
mod split;

pub use compose::{
    build_new_name, match_timestamp, Mode, RenameOptions, TimestampMatch, DEFAULT_TEXT_SEPARATOR,
};
pub use split::{split_file_name, FileNameParts, FILENAME_TAG_SEPARATOR};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::errors::AppendFilenameError;

/// Result of one rename attempt. Errors are counted, never aborted on, so a
/// batch always runs to the end; `new_path` carries the computed name for
/// display and for symlink re-pointing (also under dry-run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub errors: u32,
    pub new_path: Option<PathBuf>,
}

impl RenameOutcome {
    fn succeeded(new_path: PathBuf) -> Self {
        Self {
            errors: 0,
            new_path: Some(new_path),
        }
    }

    fn failed() -> Self {
        Self {
            errors: 1,
            new_path: None,
        }
    }
}

/// Rename a single regular file (or symlink entry) in place.
///
/// Directories and missing paths are skipped with one counted error. Under
/// dry-run the computed new path is returned but the filesystem stays
/// untouched; otherwise exactly one `fs::rename` call is made.
pub fn rename_file(path: &Path, options: &RenameOptions) -> RenameOutcome {
    if path.is_dir() {
        warn!(
            "Skipping directory {} because only file names are processed",
            path.display()
        );
        return RenameOutcome::failed();
    }
    if !path.is_file() {
        error!(
            "{}, skipping",
            AppendFilenameError::NotAFile(path.to_path_buf())
        );
        return RenameOutcome::failed();
    }

    // Non-UTF-8 names cannot be decomposed by the name grammar; treat them
    // like a pattern mismatch instead of panicking mid-batch.
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        error!(
            "{}",
            AppendFilenameError::InvalidFileName(path.to_path_buf())
        );
        return RenameOutcome::failed();
    };

    let new_name = build_new_name(name, options);
    let new_path = path.with_file_name(&new_name);

    if options.dryrun {
        info!("would rename {}", path.display());
        info!("        into {}", new_path.display());
        return RenameOutcome::succeeded(new_path);
    }

    debug!(src = %path.display(), dest = %new_path.display(), "renaming");
    match fs::rename(path, &new_path) {
        Ok(()) => RenameOutcome::succeeded(new_path),
        Err(source) => {
            error!(
                "{}",
                AppendFilenameError::RenameFailed {
                    from: path.to_path_buf(),
                    to: new_path,
                    source,
                }
            );
            RenameOutcome::failed()
        }
    }
}

/// Rename `path`, following a same-named symlink to its target first.
///
/// A non-broken symlink whose target carries the same final name gets its
/// target renamed with the same options, then the link is re-pointed at the
/// new target name (logged only under dry-run). A target with a different
/// name is left alone. A broken link is skipped entirely with one counted
/// error. In every non-broken case `path` itself is renamed afterwards and
/// the error counts accumulate.
pub fn rename_with_symlink_propagation(path: &Path, options: &RenameOptions) -> RenameOutcome {
    if is_broken_symlink(path) {
        error!(
            "{}, skipping",
            AppendFilenameError::BrokenSymlink(path.to_path_buf())
        );
        return RenameOutcome::failed();
    }

    let mut errors = 0;

    if let Some(stored_target) = file_symlink_target(path) {
        if stored_target.file_name() == path.file_name() {
            // The stored link value may be relative to the link's directory.
            let target = resolve_against_link_dir(path, &stored_target);
            let outcome = rename_file(&target, options);
            errors += outcome.errors;

            if let Some(new_target) = outcome.new_path
                && new_target != target
            {
                info!(
                    "Renaming the symlink target of {} ({}) as well",
                    path.display(),
                    target.display()
                );
                let new_stored = match new_target.file_name() {
                    Some(name) => stored_target.with_file_name(name),
                    None => new_target.clone(),
                };
                if options.dryrun {
                    debug!(
                        "would re-link {} from {} to {}",
                        path.display(),
                        stored_target.display(),
                        new_stored.display()
                    );
                } else if let Err(e) = relink(path, &new_stored) {
                    error!("Failed to re-link {}: {}", path.display(), e);
                    errors += 1;
                }
            }
        } else {
            debug!(
                "{} links to {} but the names differ, leaving the target alone",
                path.display(),
                stored_target.display()
            );
        }
    }

    let outcome = rename_file(path, options);
    RenameOutcome {
        errors: errors + outcome.errors,
        new_path: outcome.new_path,
    }
}

/// A symlink entry whose resolution fails.
fn is_broken_symlink(path: &Path) -> bool {
    let is_link = path
        .symlink_metadata()
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    is_link && !path.exists()
}

/// Stored link value of `path` when it is a symlink resolving to a regular
/// file. None for plain files, directories and broken links.
fn file_symlink_target(path: &Path) -> Option<PathBuf> {
    let meta = path.symlink_metadata().ok()?;
    if !meta.file_type().is_symlink() || !path.is_file() {
        return None;
    }
    fs::read_link(path).ok()
}

fn resolve_against_link_dir(link: &Path, stored: &Path) -> PathBuf {
    if stored.is_absolute() {
        return stored.to_path_buf();
    }
    match link.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(stored),
        _ => stored.to_path_buf(),
    }
}

/// Replace `link` with a fresh symlink pointing at `target`.
fn relink(link: &Path, target: &Path) -> io::Result<()> {
    fs::remove_file(link)?;
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }
    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(target, link)
    }
}
