//! Single-level discovery: enumerate a folder's immediate children and
//! filter them by extension, substring, or entry kind.
//!
//! None of these recurse and none of them promise an ordering; the returned
//! vector is freshly built per call. A `path` that is not a readable folder
//! yields an empty vector rather than an error, so callers can probe
//! speculatively.

use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_op::error::{FsOpError, FsOpResult};
use crate::path_ops;

// Shared enumeration core: yields (path, is_dir) for each readable child.
fn scan_children<F>(path: &Path, mut keep: F) -> Vec<PathBuf>
where
    F: FnMut(&Path, bool) -> bool,
{
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let is_dir = match entry.file_type() {
            Ok(ft) => ft.is_dir(),
            Err(e) => {
                tracing::debug!("skipping unreadable entry {:?}: {}", entry.path(), e);
                continue;
            }
        };
        let p = entry.path();
        if keep(&p, is_dir) {
            found.push(p);
        }
    }
    found
}

/// All regular (non-folder) children of `path` whose extension equals
/// `extension` (leading dot included, e.g. `".txt"`).
pub fn files_by_extension<P: AsRef<Path>>(path: P, extension: &str) -> Vec<PathBuf> {
    scan_children(path.as_ref(), |p, is_dir| {
        !is_dir && path_ops::file_extension(p) == extension
    })
}

/// All non-folder children of `path` whose full path string contains
/// `substring`.
pub fn files_by_name<P: AsRef<Path>>(path: P, substring: &str) -> Vec<PathBuf> {
    scan_children(path.as_ref(), |p, is_dir| {
        !is_dir && p.to_string_lossy().contains(substring)
    })
}

/// All folder children of `path` whose full path string contains
/// `substring`.
pub fn folders_by_name<P: AsRef<Path>>(path: P, substring: &str) -> Vec<PathBuf> {
    scan_children(path.as_ref(), |p, is_dir| {
        is_dir && p.to_string_lossy().contains(substring)
    })
}

/// Sort paths by the numeric value embedded in their filenames.
///
/// Unimplemented; present for interface completeness only and always
/// answers [`FsOpError::Unsupported`].
pub fn sort_paths_by_numeric_value(
    _paths: Vec<PathBuf>,
    _ascending: bool,
) -> FsOpResult<Vec<PathBuf>> {
    Err(FsOpError::Unsupported("sort_paths_by_numeric_value"))
}
