//! Library-directory traversal for the `shelfmark` binary.
//!
//! Walks a directory tree, dispatches every regular file to its format
//! handler, and returns one outcome record per file. The outcome list is the
//! run's only state: failures are collected per file and never abort the
//! walk, and nothing is shared between runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use shelfmark_formats::suggest_filename;

/// Options for one library run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory names to skip entirely (dot-directories are always skipped)
    pub ignored_folders: Vec<String>,

    /// Report suggested filenames without touching any file
    pub suggest_only: bool,
}

/// Result record for one visited file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Path relative to the library root
    pub path: PathBuf,

    /// New filename on success, failure message otherwise
    pub result: Result<String, String>,
}

/// Walk the library and process every regular file in it.
///
/// Files are visited in a deterministic order (directory entries sorted by
/// name). Unless `suggest_only` is set, each successfully handled file is
/// renamed in place inside its own directory.
///
/// # Errors
///
/// Only traversal itself can fail (an unreadable directory); per-file
/// pipeline failures are reported through the returned outcomes.
pub fn process_library(root: &Path, options: &RunOptions) -> anyhow::Result<Vec<FileOutcome>> {
    let mut outcomes = Vec::new();
    walk(root, root, options, &mut outcomes)?;
    Ok(outcomes)
}

fn walk(
    dir: &Path,
    root: &Path,
    options: &RunOptions,
    outcomes: &mut Vec<FileOutcome>,
) -> anyhow::Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("failed to list directory {}", dir.display()))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;

        if file_type.is_dir() {
            let name = entry.file_name().to_string_lossy().to_string();
            if should_descend(&name, &options.ignored_folders) {
                walk(&path, root, options, outcomes)?;
            } else {
                log::debug!("skipping directory {}", path.display());
            }
        } else if file_type.is_file() {
            outcomes.push(process_file(&path, root, options));
        }
    }

    Ok(())
}

/// Dot-directories and explicitly ignored names are not entered
fn should_descend(name: &str, ignored: &[String]) -> bool {
    !name.starts_with('.') && !ignored.iter().any(|ignored_name| ignored_name == name)
}

/// Run one file through its handler and, unless suggesting, rename it
fn process_file(path: &Path, root: &Path, options: &RunOptions) -> FileOutcome {
    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    let result = match suggest_filename(path) {
        Ok(new_name) => {
            if options.suggest_only {
                Ok(new_name)
            } else {
                let target = path.with_file_name(&new_name);
                match fs::rename(path, &target) {
                    Ok(()) => Ok(new_name),
                    Err(e) => Err(format!("failed to rename: {e}")),
                }
            }
        }
        Err(e) => Err(e.to_string()),
    };

    FileOutcome {
        path: relative,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_descend() {
        let ignored = vec!["To Sort".to_string()];
        assert!(should_descend("Fiction", &ignored));
        assert!(!should_descend("To Sort", &ignored));
        assert!(!should_descend(".git", &ignored));
        assert!(!should_descend(".hidden", &[]));
    }
}
