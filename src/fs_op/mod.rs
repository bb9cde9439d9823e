//! Filesystem operations: existence checks, file/folder CRUD, whole-file
//! I/O and single-level discovery.
//!
//! The submodules are small and focused; the most commonly used items are
//! re-exported here so callers can write `filekit::fs_op::create_folder(..)`
//! without caring which file an operation lives in.

pub mod copy;
pub mod create;
pub mod discover;
pub mod error;
pub mod io;
pub mod mv;
pub mod remove;
pub mod stat;

pub use copy::{copy_file, copy_folder};
pub use create::create_folder;
pub use discover::{
    files_by_extension, files_by_name, folders_by_name, sort_paths_by_numeric_value,
};
pub use error::{FsOpError, FsOpResult};
pub use io::{read_binary_file, read_text_file, write_binary_file, write_text_file};
pub use mv::{move_file, move_folder, rename_file, rename_folder};
pub use remove::{delete_file, delete_folder};
pub use stat::{file_exists, folder_exists, PathType};
