use std::fs;
use std::path::Path;

use crate::fs_op::error::{FsOpError, FsOpResult};
use crate::fs_op::stat::{file_exists, folder_exists};

// Writes require the parent folder to already exist; these helpers never
// create directories implicitly.
fn require_parent(path: &Path) -> FsOpResult<()> {
    let parent = path.parent().unwrap_or(Path::new(""));
    if !folder_exists(parent) {
        return Err(FsOpError::NotFound(parent.to_path_buf()));
    }
    Ok(())
}

/// Create or overwrite the file at `path` with the exact bytes of `text`.
///
/// No newline translation and no encoding work; the file receives the
/// string's UTF-8 bytes as-is. Fails with [`FsOpError::NotFound`] when the
/// parent folder does not exist.
pub fn write_text_file<P: AsRef<Path>>(path: P, text: &str) -> FsOpResult<()> {
    let p = path.as_ref();
    require_parent(p)?;
    fs::write(p, text.as_bytes())?;
    Ok(())
}

/// Read the whole file at `path` as text.
///
/// `Ok(String::new())` always means a genuinely empty file; a missing file
/// is [`FsOpError::NotFound`] and read failures (including content that is
/// not valid UTF-8) surface as [`FsOpError::Io`], so failure and emptiness
/// are distinguishable.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> FsOpResult<String> {
    let p = path.as_ref();
    if !file_exists(p) {
        return Err(FsOpError::NotFound(p.to_path_buf()));
    }
    Ok(fs::read_to_string(p)?)
}

/// Create or overwrite the file at `path` with exactly `bytes`.
///
/// Same parent-folder precondition as [`write_text_file`]. No framing or
/// headers are added; the file is the raw byte sequence.
pub fn write_binary_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> FsOpResult<()> {
    let p = path.as_ref();
    require_parent(p)?;
    fs::write(p, bytes)?;
    Ok(())
}

/// Read the whole file at `path` into a freshly allocated buffer.
///
/// The returned `Vec` is sized to the file's length and owned by the
/// caller. A missing file is [`FsOpError::NotFound`].
pub fn read_binary_file<P: AsRef<Path>>(path: P) -> FsOpResult<Vec<u8>> {
    let p = path.as_ref();
    if !file_exists(p) {
        return Err(FsOpError::NotFound(p.to_path_buf()));
    }
    Ok(fs::read(p)?)
}
