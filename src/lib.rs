//! Small filesystem helper library.
//!
//! Two stateless components:
//!
//! - [`path_ops`] — path decomposition helpers (stem, extension, parent,
//!   folder name) plus numeric filename extraction. Pure string work except
//!   [`path_ops::folder_name`], which must ask the filesystem whether the
//!   path is currently a directory.
//! - [`fs_op`] — existence checks, create/delete/rename/move/copy for files
//!   and folders, whole-file text/binary I/O, and single-level discovery.
//!
//! Every fallible operation returns [`fs_op::FsOpResult`]; ordinary
//! filesystem failures never panic and never escape as untyped errors.
//! All preconditions are check-then-act: nothing here is atomic against
//! concurrent external mutation of the same paths.

pub mod fs_op;
pub mod path_ops;

pub use crate::fs_op::error::{FsOpError, FsOpResult};
pub use crate::fs_op::stat::{file_exists, folder_exists, PathType};
