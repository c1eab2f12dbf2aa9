//! Locating the backing todo file inside a directory tree.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Default name of the backing file.
pub const DEFAULT_FILE_NAME: &str = "todo.txt";

/// Search `start_dir` for a file named `file_name`.
///
/// `max_depth` bounds how many directory levels below `start_dir` are
/// searched; 0 looks in `start_dir` only. Entries are visited depth-first,
/// files before directories, each group sorted by name, so the result is
/// stable for a given tree. Returns `Ok(None)` when nothing matches or
/// `start_dir` is not a directory.
pub fn find_file(start_dir: &Path, file_name: &str, max_depth: usize) -> Result<Option<PathBuf>> {
    if !start_dir.is_dir() {
        tracing::debug!(path = %start_dir.display(), "search root is not a directory");
        return Ok(None);
    }

    // Files directly inside a directory at depth d sit at walk depth d + 1.
    let walker = WalkDir::new(start_dir)
        .max_depth(max_depth.saturating_add(1))
        .sort_by(files_first);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(std::io::Error::from(err).into()),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_name() == file_name && entry.path().is_file() {
            tracing::debug!(path = %entry.path().display(), "found {file_name}");
            return Ok(Some(entry.into_path()));
        }
    }

    tracing::debug!(
        root = %start_dir.display(),
        max_depth,
        "no {file_name} within search depth"
    );
    Ok(None)
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}
