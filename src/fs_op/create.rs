use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpResult;
use crate::fs_op::stat::folder_exists;

/// Create the folder at `path`, together with any missing ancestors.
///
/// Idempotent: a folder that already exists is treated as success, since
/// the post-condition ("the folder exists") already holds. A path occupied
/// by a non-directory entry surfaces as the underlying I/O error.
pub fn create_folder<P: AsRef<Path>>(path: P) -> FsOpResult<()> {
    let p = path.as_ref();
    if folder_exists(p) {
        return Ok(());
    }
    fs::create_dir_all(p)?;
    Ok(())
}
