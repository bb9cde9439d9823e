//! Path decomposition helpers.
//!
//! Everything here works on the path string alone, with one exception:
//! [`folder_name`] must ask the filesystem whether the path currently
//! denotes a directory, so its answer depends on live state.
//!
//! Non-Unicode path segments are converted lossily, the same way the rest
//! of the crate renders paths for matching and display.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fs_op::stat::folder_exists;

// First maximal run of decimal digits, anywhere in the name.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Last path segment with any trailing extension removed.
///
/// A segment without an extension is returned whole; an empty path yields
/// an empty string. Never touches the filesystem.
pub fn file_stem<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extension of the last path segment, including the leading dot
/// (`".txt"`), or an empty string when the segment has none.
pub fn file_extension<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// Full last path segment, extension included.
pub fn file_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Name of the folder the path points into.
///
/// If `path` currently exists as a directory, this is its own last segment.
/// Otherwise the path is assumed to denote a file (existing or not) and the
/// last segment of its parent is returned. The answer therefore depends on
/// live filesystem state, not the path string alone.
pub fn folder_name<P: AsRef<Path>>(path: P) -> String {
    let p = path.as_ref();
    if folder_exists(p) {
        file_name(p)
    } else {
        p.parent().map(file_name).unwrap_or_default()
    }
}

/// The path with its last segment removed, whether that segment denotes a
/// file or a folder.
///
/// A root or single-segment relative path has nothing left once the last
/// segment goes; the result is then an empty `PathBuf`.
pub fn parent_folder<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Extract the first run of decimal digits from a filename.
///
/// `"shot_0042_final.png"` yields `42`; a later second run is ignored, so
/// `"14name99.jpg"` yields `14`. Returns `None` for an empty input, a name
/// without digits, or a run too large for `i64`.
pub fn int_from_filename(filename: &str) -> Option<i64> {
    let run = DIGIT_RUN.find(filename)?;
    run.as_str().parse().ok()
}
