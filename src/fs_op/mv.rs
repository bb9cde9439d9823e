use std::fs;
use std::path::Path;

use crate::fs_op::error::{FsOpError, FsOpResult};
use crate::fs_op::stat::{file_exists, folder_exists, PathType};
use crate::path_ops;

/// Rename the folder `old` to `new` with a single platform rename.
///
/// Fails with [`FsOpError::NotFound`] when `old` is not an existing
/// directory and with [`FsOpError::AlreadyExists`] when anything occupies
/// `new`. The check-then-rename pair is not atomic against concurrent
/// external changes.
pub fn rename_folder<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> FsOpResult<()> {
    let (old, new) = (old.as_ref(), new.as_ref());
    if !folder_exists(old) {
        return Err(FsOpError::NotFound(old.to_path_buf()));
    }
    if PathType::of(new) != PathType::NotFound {
        return Err(FsOpError::AlreadyExists(new.to_path_buf()));
    }
    fs::rename(old, new)?;
    Ok(())
}

/// Move the folder `from` into the existing folder `to_parent`, keeping its
/// current name.
///
/// The destination is `to_parent` joined with the folder name of `from`
/// (derived via [`path_ops::folder_name`]); beyond that the contract is the
/// same as [`rename_folder`]. `to_parent` itself must already exist or the
/// rename fails with an I/O error.
pub fn move_folder<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to_parent: Q) -> FsOpResult<()> {
    let from = from.as_ref();
    if !folder_exists(from) {
        return Err(FsOpError::NotFound(from.to_path_buf()));
    }
    let dest = to_parent.as_ref().join(path_ops::folder_name(from));
    tracing::debug!("moving {} -> {}", from.display(), dest.display());
    if PathType::of(&dest) != PathType::NotFound {
        return Err(FsOpError::AlreadyExists(dest));
    }
    fs::rename(from, &dest)?;
    Ok(())
}

/// Rename the file `old` to `new`.
///
/// Same contract as [`rename_folder`], for regular files.
pub fn rename_file<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> FsOpResult<()> {
    let (old, new) = (old.as_ref(), new.as_ref());
    if !file_exists(old) {
        return Err(FsOpError::NotFound(old.to_path_buf()));
    }
    if PathType::of(new) != PathType::NotFound {
        return Err(FsOpError::AlreadyExists(new.to_path_buf()));
    }
    fs::rename(old, new)?;
    Ok(())
}

/// Move the file `from` to the full destination path `to` (filename
/// included). The destination's parent must already exist.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> FsOpResult<()> {
    rename_file(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn rename_folder_moves_content_set() {
        let td = tempdir().unwrap();
        let old = td.path().join("folderTest");
        fs::create_dir(&old).unwrap();
        fs::write(old.join("inner.txt"), b"hello").unwrap();
        let new = td.path().join("renamedFolderTest");

        rename_folder(&old, &new).unwrap();
        assert!(!old.exists());
        assert!(new.is_dir());
        assert_eq!(fs::read_to_string(new.join("inner.txt")).unwrap(), "hello");
    }

    #[test]
    fn rename_folder_preconditions() {
        let td = tempdir().unwrap();
        let missing = td.path().join("missing");
        let target = td.path().join("target");
        fs::create_dir(&target).unwrap();

        assert!(matches!(
            rename_folder(&missing, td.path().join("x")),
            Err(FsOpError::NotFound(_))
        ));
        let src = td.path().join("src");
        fs::create_dir(&src).unwrap();
        assert!(matches!(
            rename_folder(&src, &target),
            Err(FsOpError::AlreadyExists(_))
        ));
        // Source untouched after the failed rename.
        assert!(src.is_dir());
    }

    #[test]
    fn move_folder_keeps_folder_name() {
        let td = tempdir().unwrap();
        let src = td.path().join("payload");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("f.txt"), b"x").unwrap();
        let parent = td.path().join("container");
        fs::create_dir(&parent).unwrap();

        move_folder(&src, &parent).unwrap();
        assert!(!src.exists());
        assert!(parent.join("payload").is_dir());
        assert!(parent.join("payload/f.txt").is_file());
    }

    #[test]
    fn move_folder_rejects_occupied_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("payload");
        fs::create_dir(&src).unwrap();
        let parent = td.path().join("container");
        fs::create_dir_all(parent.join("payload")).unwrap();

        assert!(matches!(
            move_folder(&src, &parent),
            Err(FsOpError::AlreadyExists(_))
        ));
        assert!(src.is_dir());
    }

    #[test]
    fn rename_and_move_file() {
        let td = tempdir().unwrap();
        let f = td.path().join("fileTest.txt");
        fs::write(&f, b"Test").unwrap();
        let renamed = td.path().join("Renamed.txt");
        rename_file(&f, &renamed).unwrap();
        assert!(!f.exists());
        assert!(renamed.is_file());

        let sub = td.path().join("MovedTest");
        fs::create_dir(&sub).unwrap();
        let moved = sub.join("fileTest.txt");
        move_file(&renamed, &moved).unwrap();
        assert!(!renamed.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "Test");
    }

    #[test]
    fn move_file_fails_without_destination_parent() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").unwrap();
        let dest = td.path().join("no_such_dir/f.txt");
        assert!(matches!(move_file(&f, &dest), Err(FsOpError::Io(_))));
        assert!(f.is_file());
    }
}
