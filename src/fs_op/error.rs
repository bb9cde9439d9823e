use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem operation helpers.
///
/// This is the single error type crossing the `fs_op` boundary. Every
/// operation that can fail for an ordinary reason (missing source, occupied
/// destination, any underlying I/O problem) reports it here instead of
/// panicking or letting a raw `io::Error` escape untyped.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// A path that must exist does not (or is not the expected kind).
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// A destination that must be absent is already present.
    #[error("path already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Wrapper for underlying I/O errors (permissions, device failures,
    /// invalid names, partially failed platform primitives).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation is deliberately not implemented.
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
}

/// Shorthand result type used across `fs_op`.
pub type FsOpResult<T> = Result<T, FsOpError>;
