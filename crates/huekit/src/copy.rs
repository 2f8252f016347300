//! Mirroring the stylesheet library into the target directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::HuekitError;

/// Copies every file under `source` to the same relative path under `target`.
///
/// Intermediate directories are created and existing files are overwritten.
/// A missing or empty `source` copies nothing. Files copied before a failure
/// stay on disk. When `target` is `source` itself, or overlaps it so that a
/// file would be copied onto itself, that file is left alone.
///
/// Returns the relative paths that were copied.
pub fn copy_library(source: &Path, target: &Path) -> Result<Vec<PathBuf>, HuekitError> {
    if !source.is_dir() {
        debug!(source = %source.display(), "no stylesheet library, nothing to copy");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    walk_dir_recursive(source, source, &mut files)?;
    files.sort();

    let mut copied = Vec::with_capacity(files.len());
    for relative in files {
        let from = source.join(&relative);
        let to = target.join(&relative);
        // fs::copy truncates the destination before reading the source.
        if is_same_file(&from, &to) {
            debug!(file = %relative.display(), "already in place, skipped");
            continue;
        }
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(HuekitError::io("create directory", parent))?;
        }
        fs::copy(&from, &to).map_err(HuekitError::io("copy stylesheet to", &to))?;
        debug!(file = %relative.display(), "copied stylesheet");
        copied.push(relative);
    }

    Ok(copied)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Collects files below `current` as paths relative to `root`.
fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<(), HuekitError> {
    let entries = fs::read_dir(current).map_err(HuekitError::io("read directory", current))?;

    for entry in entries {
        let entry = entry.map_err(HuekitError::io("read directory", current))?;
        let path = entry.path();

        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if path.is_file() {
            if let Ok(relative) = path.strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
    }

    Ok(())
}
