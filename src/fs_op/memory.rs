//! In-memory [`FileSystem`] used by tests and by anything that wants to
//! drive the browser without touching the disk.
//!
//! Directory entries are returned in insertion order, which makes listing
//! order deterministic (unlike `read_dir`).

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::types::FileKind;
use crate::fs_op::stat::{FileStat, FileSystem};

const MAX_LINK_HOPS: usize = 8;

#[derive(Debug, Clone)]
enum Node {
    Dir { children: Vec<String>, readable: bool },
    File { size: u64, executable: bool },
    Symlink { target: PathBuf },
    Other,
}

/// Builder-style in-memory filesystem. Paths should be absolute.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    nodes: HashMap<PathBuf, Node>,
    owner: Option<String>,
}

impl MemFs {
    /// Create a filesystem containing only the root directory `/`.
    pub fn new() -> Self {
        let mut fs = MemFs::default();
        fs.nodes.insert(
            PathBuf::from("/"),
            Node::Dir {
                children: Vec::new(),
                readable: true,
            },
        );
        fs
    }

    /// Owner name reported for every node.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Add a directory (and any missing parents).
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(
            path.as_ref(),
            Node::Dir {
                children: Vec::new(),
                readable: true,
            },
        );
        self
    }

    /// Add a non-executable regular file of `size` bytes.
    pub fn file(mut self, path: impl AsRef<Path>, size: u64) -> Self {
        self.insert(
            path.as_ref(),
            Node::File {
                size,
                executable: false,
            },
        );
        self
    }

    /// Add an executable regular file.
    pub fn executable(mut self, path: impl AsRef<Path>, size: u64) -> Self {
        self.insert(
            path.as_ref(),
            Node::File {
                size,
                executable: true,
            },
        );
        self
    }

    pub fn symlink(mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        self.insert(
            path.as_ref(),
            Node::Symlink {
                target: target.as_ref().to_path_buf(),
            },
        );
        self
    }

    /// Add a node that is neither file, directory nor link (e.g. a FIFO).
    pub fn special(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Node::Other);
        self
    }

    /// Make directory `path` unreadable: stat still works, listing fails.
    pub fn deny(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(Node::Dir { readable, .. }) = self.nodes.get_mut(path.as_ref()) {
            *readable = false;
        }
        self
    }

    fn insert(&mut self, path: &Path, node: Node) {
        if let Some(parent) = path.parent() {
            if !self.nodes.contains_key(parent) {
                self.insert(
                    parent,
                    Node::Dir {
                        children: Vec::new(),
                        readable: true,
                    },
                );
            }
            if let (Some(Node::Dir { children, .. }), Some(name)) =
                (self.nodes.get_mut(parent), path.file_name())
            {
                let name = name.to_string_lossy().into_owned();
                if !children.contains(&name) {
                    children.push(name);
                }
            }
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    // Finds `path` itself; symlinks among its ancestors are followed, the
    // final component is not.
    fn lookup(&self, path: &Path) -> io::Result<&Node> {
        if let Some(node) = self.nodes.get(path) {
            return Ok(node);
        }
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if let Ok((real_parent, Node::Dir { .. })) = self.resolve(parent) {
                if real_parent != parent {
                    if let Some(node) = self.nodes.get(&real_parent.join(name)) {
                        return Ok(node);
                    }
                }
            }
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        ))
    }

    fn resolve(&self, path: &Path) -> io::Result<(PathBuf, &Node)> {
        let mut current = path.to_path_buf();
        for _ in 0..MAX_LINK_HOPS {
            match self.lookup(&current)? {
                Node::Symlink { target } => {
                    current = match current.parent() {
                        Some(parent) if target.is_relative() => parent.join(target),
                        _ => target.clone(),
                    };
                }
                node => return Ok((current, node)),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("too many levels of symbolic links: {}", path.display()),
        ))
    }

    fn stat_of(&self, node: &Node) -> FileStat {
        let (kind, size) = match node {
            Node::Dir { .. } => (FileKind::Directory, 4096),
            Node::File { size, .. } => (FileKind::RegularFile, *size),
            Node::Symlink { target } => (FileKind::Symlink, target.as_os_str().len() as u64),
            Node::Other => (FileKind::Other, 0),
        };
        FileStat {
            kind,
            size,
            owner: self.owner.clone(),
        }
    }
}

impl FileSystem for MemFs {
    fn metadata(&self, path: &Path) -> io::Result<FileStat> {
        let (_, node) = self.resolve(path)?;
        Ok(self.stat_of(node))
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<FileStat> {
        Ok(self.stat_of(self.lookup(path)?))
    }

    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>> {
        match self.resolve(path)? {
            (_, Node::Dir { readable: false, .. }) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )),
            (_, Node::Dir { children, .. }) => Ok(children.clone()),
            _ => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("not a directory: {}", path.display()),
            )),
        }
    }

    fn is_executable(&self, path: &Path) -> bool {
        matches!(
            self.resolve(path),
            Ok((_, Node::File { executable: true, .. })) | Ok((_, Node::Dir { .. }))
        )
    }
}
