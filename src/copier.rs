//! Best-effort mirroring of static assets into the output tree.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

/// What [`copy_tree`] did with a source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source was absent; nothing was written
    Missing,
    /// A single file was copied
    File,
    /// A directory was mirrored, with the number of files copied
    Directory { files: usize },
}

/// Creates a directory and its parents, announcing it when it did not exist before.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
        println!("Created directory: {}", path.display());
    }
    Ok(())
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Copying file: {} -> {}", source.display(), dest.display());
    fs::copy(source, dest)?;
    Ok(())
}

/// Mirrors `source` into `dest`.
///
/// A missing source is a warning, not an error. Directories are copied recursively,
/// creating intermediate directories as needed; files are copied verbatim after their
/// destination parent has been created.
///
/// # Errors
/// * `Error::IoError` or `Error::WalkDirError` when an existing source cannot be read or
///   the destination cannot be written
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<CopyOutcome> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    if !source.exists() {
        warn!("Source not found: {}", source.display());
        return Ok(CopyOutcome::Missing);
    }

    if source.is_file() {
        copy_file(source, dest)?;
        return Ok(CopyOutcome::File);
    }

    ensure_dir(dest)?;
    let mut files = 0;
    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(entry.file_name()));
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            files += 1;
        }
    }

    Ok(CopyOutcome::Directory { files })
}
