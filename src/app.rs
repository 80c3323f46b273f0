//! Application orchestrator.
//! Checks flag conflicts, initializes logging, installs the signal handler,
//! resolves the text to insert, and walks the file list one rename at a time
//! while accumulating per-file errors.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::Args;
use crate::errors::AppendFilenameError;
use crate::logging;
use crate::output as out;
use crate::rename::{self, RenameOptions};
use crate::{prompt, shutdown, vocab};

/// Run the CLI application.
///
/// Configuration conflicts abort before any file is touched; per-file errors
/// are counted and reported after the whole batch was attempted. The error
/// returned here carries the process exit code (see AppendFilenameError).
pub fn run(args: Args) -> Result<()> {
    if args.verbose && args.quiet {
        let err = AppendFilenameError::VerbosityConflict;
        out::print_error(&format!("{err}; pick one of the two"));
        return Err(err.into());
    }
    if args.prepend && args.smart_prepend {
        let err = AppendFilenameError::ModeConflict;
        out::print_error(&format!("{err}; pick one of the two"));
        return Err(err.into());
    }

    logging::init_tracing(&args.effective_log_level())?;

    if args.files.is_empty() {
        let err = AppendFilenameError::NoInputFiles;
        out::print_error(&format!("{err}; add at least one file name"));
        return Err(err.into());
    }

    // Flag text wins; otherwise ask, with words harvested from the working
    // directory shown as suggestions. Empty answers mean "nothing to do".
    let text = match args.text.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            debug!("no --text given, asking interactively");
            let vocabulary = vocab::harvest(Path::new("."));
            match prompt::ask_for_text(&vocabulary)? {
                Some(t) => t,
                None => {
                    info!("no text given, nothing to do");
                    return Ok(());
                }
            }
        }
    };
    debug!(text = %text, "text resolved");

    let options = RenameOptions::new(text, args.mode())
        .with_separator(args.separator.clone())
        .dryrun(args.dryrun);

    ctrlc::set_handler(|| {
        shutdown::request();
    })
    .context("failed to install signal handler")?;

    let mut errors = 0u32;
    for path in &args.files {
        if shutdown::is_requested() {
            out::print_warn("interrupted; leaving the remaining files untouched");
            break;
        }

        let outcome = rename::rename_with_symlink_propagation(path, &options);
        errors += outcome.errors;

        if let Some(new_path) = &outcome.new_path {
            if options.dryrun {
                out::print_info(&format!(
                    "would rename '{}' -> '{}'",
                    path.display(),
                    new_path.display()
                ));
            } else {
                out::print_user(&format!("{} -> {}", path.display(), new_path.display()));
            }
        }
    }

    if errors > 0 {
        let err = AppendFilenameError::FilesFailed { count: errors };
        out::print_error(&err.to_string());
        return Err(err.into());
    }

    debug!("successfully finished");
    Ok(())
}
