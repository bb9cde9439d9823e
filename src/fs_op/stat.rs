use std::fs;
use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist, or could not be inspected at all
    /// (permission denial on a parent, invalid name, ...).
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (socket, FIFO, device node, dangling symlink target, ...).
    Other,
}

impl PathType {
    /// Classify `path` with a single metadata query.
    ///
    /// Symlinks are followed, matching what the mutation helpers in this
    /// crate operate on. Any error from the underlying stat call is folded
    /// into [`PathType::NotFound`]; callers of the existence predicates get
    /// a plain `false` rather than a propagated error.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Ok(md) => {
                let ft = md.file_type();
                if ft.is_dir() {
                    PathType::Directory
                } else if ft.is_file() {
                    PathType::File
                } else {
                    PathType::Other
                }
            }
            Err(_) => PathType::NotFound,
        }
    }
}

/// Return `true` if `path` currently denotes a directory.
///
/// Access errors are swallowed and reported as `false`.
pub fn folder_exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if `path` currently denotes a regular file.
///
/// Access errors are swallowed and reported as `false`.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn nonexistent_path_is_not_found() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_entry");
        assert_eq!(PathType::of(&p), PathType::NotFound);
        assert!(!folder_exists(&p));
        assert!(!file_exists(&p));
    }

    #[test]
    fn classifies_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(PathType::of(&file), PathType::File);
        assert!(file_exists(&file));
        assert!(!folder_exists(&file));

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(PathType::of(&dir), PathType::Directory);
        assert!(folder_exists(&dir));
        assert!(!file_exists(&dir));
    }

    #[test]
    fn file_is_not_a_folder_and_vice_versa() {
        let tmp = tempdir().unwrap();
        assert!(folder_exists(tmp.path()));
        assert!(!file_exists(tmp.path()));
    }
}
