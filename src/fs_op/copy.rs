use std::io;
use std::path::Path;

use fs_extra::dir;
use fs_extra::file;

use crate::fs_op::error::{FsOpError, FsOpResult};
use crate::fs_op::stat::{file_exists, folder_exists, PathType};

// 64 KiB copy buffer, a reasonable balance of throughput and memory for
// both single files and recursive trees.
const COPY_BUFFER: usize = 64 * 1024;

/// Recursively duplicate the folder `src` as `dest`.
///
/// Fails with [`FsOpError::NotFound`] when `src` is not an existing
/// directory and [`FsOpError::AlreadyExists`] when anything occupies
/// `dest`. Conflicting entries encountered during the recursion itself are
/// overwritten; if the underlying copy fails partway the destination may be
/// left partially populated (no rollback is attempted).
pub fn copy_folder<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> FsOpResult<()> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    if !folder_exists(src) {
        return Err(FsOpError::NotFound(src.to_path_buf()));
    }
    if PathType::of(dest) != PathType::NotFound {
        return Err(FsOpError::AlreadyExists(dest.to_path_buf()));
    }

    let mut options = dir::CopyOptions::new();
    // `copy_inside` makes `dest` itself the copy of `src` instead of
    // requiring an existing destination to copy into.
    options.copy_inside = true;
    options.overwrite = true;
    options.buffer_size = COPY_BUFFER;

    // fs_extra has its own error type; fold it into our Io variant.
    dir::copy(src, dest, &options).map_err(io::Error::other)?;
    Ok(())
}

/// Copy the single file `src` to the full destination path `dest`.
///
/// Same preconditions as [`copy_folder`]: the source must be an existing
/// regular file and the destination must be absent.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> FsOpResult<()> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    if !file_exists(src) {
        return Err(FsOpError::NotFound(src.to_path_buf()));
    }
    if PathType::of(dest) != PathType::NotFound {
        return Err(FsOpError::AlreadyExists(dest.to_path_buf()));
    }

    let mut options = file::CopyOptions::new();
    options.overwrite = true;
    options.buffer_size = COPY_BUFFER;
    file::copy(src, dest, &options).map_err(io::Error::other)?;
    Ok(())
}
