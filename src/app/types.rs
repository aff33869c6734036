use std::fmt;

/// Kind of a directory entry as reported by `lstat` (links are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Directory,
    RegularFile,
    Symlink,
    /// Sockets, FIFOs, devices and anything else.
    Other,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileKind::Directory => "directory",
            FileKind::RegularFile => "file",
            FileKind::Symlink => "symlink",
            FileKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Color group for regular files recognised by their extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionBucket {
    /// Object files (`.o`).
    Object,
    /// C and C++ sources and headers.
    CSource,
    Assembly,
    Audio,
}

/// Tag used by the renderer to pick a color for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayClass {
    Directory,
    Executable,
    Symlink,
    Extension(ExtensionBucket),
    Default,
}

/// One entry of a directory snapshot.
///
/// Records are built by the lister and never mutated afterwards; a new
/// listing replaces the old one wholesale on every directory change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub kind: FileKind,
    /// Size in bytes.
    pub size: u64,
    /// Owner's user name, `None` when it could not be resolved.
    pub owner: Option<String>,
    /// Only meaningful for `FileKind::RegularFile`.
    pub executable: bool,
    pub display_class: DisplayClass,
}

impl FileRecord {
    /// Convenience constructor for a directory record.
    pub fn directory(name: impl Into<String>) -> Self {
        FileRecord {
            name: name.into(),
            kind: FileKind::Directory,
            size: 0,
            owner: None,
            executable: false,
            display_class: DisplayClass::Directory,
        }
    }

    /// Convenience constructor for a plain, non-executable file record.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        FileRecord {
            name: name.into(),
            kind: FileKind::RegularFile,
            size,
            owner: None,
            executable: false,
            display_class: DisplayClass::Default,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

/// Abstract browser commands produced from key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    Ascend,
    Descend(String),
    JumpToPrevious,
    Confirm,
    Exit,
}
