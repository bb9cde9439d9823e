use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpResult;
use crate::fs_op::stat::{file_exists, folder_exists};

/// Remove the folder at `path` and, recursively, everything inside it.
///
/// Idempotent: when no folder exists at `path` the desired end state
/// ("no folder there") already holds and the call succeeds without touching
/// anything — including the case where the path is occupied by a file.
pub fn delete_folder<P: AsRef<Path>>(path: P) -> FsOpResult<()> {
    let p = path.as_ref();
    if !folder_exists(p) {
        return Ok(());
    }
    fs::remove_dir_all(p)?;
    Ok(())
}

/// Remove the file at `path`.
///
/// Idempotent on non-existence, mirroring [`delete_folder`]. A directory at
/// `path` is left alone and reported as success for the same reason.
pub fn delete_file<P: AsRef<Path>>(path: P) -> FsOpResult<()> {
    let p = path.as_ref();
    if !file_exists(p) {
        return Ok(());
    }
    fs::remove_file(p)?;
    Ok(())
}
