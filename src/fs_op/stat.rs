//! Filesystem collaborator used by the directory lister.
//!
//! The lister never touches `std::fs` directly; it goes through the
//! [`FileSystem`] trait so listing, classification and rollback behaviour
//! can be exercised against the in-memory `MemFs` as well as the
//! real disk.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use crate::app::types::FileKind;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Result of a stat call: the fields the browser cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    pub size: u64,
    pub owner: Option<String>,
}

/// Read-only view of a filesystem.
pub trait FileSystem {
    /// Stat `path`, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<FileStat>;

    /// Stat `path` itself; a symlink is reported as `FileKind::Symlink`.
    fn symlink_metadata(&self, path: &Path) -> io::Result<FileStat>;

    /// Names of the entries of directory `path`, in filesystem order.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Whether the current user may execute `path`.
    fn is_executable(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        LocalFs
    }
}

impl FileSystem for LocalFs {
    fn metadata(&self, path: &Path) -> io::Result<FileStat> {
        Ok(file_stat(&fs::metadata(path)?))
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<FileStat> {
        Ok(file_stat(&fs::symlink_metadata(path)?))
    }

    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let e = entry?;
            names.push(e.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use nix::unistd::{access, AccessFlags};
        access(path, AccessFlags::X_OK).is_ok()
    }

    #[cfg(not(unix))]
    fn is_executable(&self, _path: &Path) -> bool {
        false
    }
}

fn kind_of(meta: &Metadata) -> FileKind {
    let ft = meta.file_type();
    if ft.is_dir() {
        FileKind::Directory
    } else if ft.is_symlink() {
        FileKind::Symlink
    } else if ft.is_file() {
        FileKind::RegularFile
    } else {
        FileKind::Other
    }
}

fn file_stat(meta: &Metadata) -> FileStat {
    FileStat {
        kind: kind_of(meta),
        size: meta.len(),
        owner: owner_name(meta),
    }
}

#[cfg(unix)]
fn owner_name(meta: &Metadata) -> Option<String> {
    use nix::unistd::{Uid, User};
    match User::from_uid(Uid::from_raw(meta.uid())) {
        Ok(Some(user)) => Some(user.name),
        _ => None,
    }
}

#[cfg(not(unix))]
fn owner_name(_meta: &Metadata) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stat_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        let st = LocalFs.symlink_metadata(&file).unwrap();
        assert_eq!(st.kind, FileKind::RegularFile);
        assert_eq!(st.size, 5);

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(LocalFs.metadata(&dir).unwrap().kind, FileKind::Directory);
    }

    #[test]
    fn nonexistent_path_errors() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_file_hopefully");
        assert!(LocalFs.metadata(&p).is_err());
        assert!(LocalFs.read_dir_names(&p).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_reported_without_following() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(LocalFs.symlink_metadata(&link).unwrap().kind, FileKind::Symlink);
        assert_eq!(LocalFs.metadata(&link).unwrap().kind, FileKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn execute_permission_check() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempdir().unwrap();
        let script = tmp.path().join("run.sh");
        fs::write(&script, b"#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(LocalFs.is_executable(&script));

        let plain = tmp.path().join("plain.txt");
        fs::write(&plain, b"text").unwrap();
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!LocalFs.is_executable(&plain));
    }
}
