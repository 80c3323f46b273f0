//! File-name decomposition.
//!
//! A file name is `<base>( -- <tags>)?(.<ext>)?`. The split is total: every
//! name decomposes, and `base + tag_suffix_and_extension` always reproduces
//! the input byte for byte. Precedence rule: a tag block beats an extension —
//! everything from the first `" -- "` on belongs to the suffix, extension
//! included.

/// Fixed separator between a file name and its optional tag list.
/// Independent of the user-chosen text separator; never configurable.
pub const FILENAME_TAG_SEPARATOR: &str = " -- ";

/// The two halves of a decomposed file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNameParts<'a> {
    /// Portion preceding any tag block and extension. May be empty
    /// (dotfiles such as `.gitignore` are all suffix).
    pub base: &'a str,
    /// Optional `" -- <tags>"` block followed by the optional `.<ext>`,
    /// kept verbatim across every insertion mode.
    pub tag_suffix_and_extension: &'a str,
}

/// Split `name` into base and tag-suffix/extension.
///
/// The suffix is the longest-starting of: tag block (plus whatever follows
/// it), extension alone, or empty. An extension is the final `.`-introduced
/// run of word characters (alphanumeric or `_`), non-empty and reaching the
/// end of the name; `"archive.tar.gz"` therefore splits before `.gz`, and a
/// trailing dot is no extension at all.
pub fn split_file_name(name: &str) -> FileNameParts<'_> {
    if let Some(idx) = name.find(FILENAME_TAG_SEPARATOR) {
        let (base, rest) = name.split_at(idx);
        return FileNameParts {
            base,
            tag_suffix_and_extension: rest,
        };
    }

    if let Some(idx) = name.rfind('.') {
        let ext = &name[idx + 1..];
        if !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_') {
            let (base, rest) = name.split_at(idx);
            return FileNameParts {
                base,
                tag_suffix_and_extension: rest,
            };
        }
    }

    FileNameParts {
        base: name,
        tag_suffix_and_extension: "",
    }
}
