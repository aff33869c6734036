//! Directory listing: read a directory through a [`FileSystem`], drop hidden
//! entries, classify what is left and hand back a sorted
//! [`DirectoryListing`].

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::app::types::{DisplayClass, ExtensionBucket, FileKind, FileRecord};
use crate::fs_op::error::ListError;
use crate::fs_op::listing::DirectoryListing;
use crate::fs_op::stat::FileSystem;

/// Names starting with this character are hidden unless `show_hidden` is set.
pub const HIDDEN_MARKER: char = '.';

static EXTENSION_BUCKETS: Lazy<HashMap<&'static str, ExtensionBucket>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("o", ExtensionBucket::Object);
    for ext in ["cpp", "hpp", "h", "c", "hh", "cc"] {
        m.insert(ext, ExtensionBucket::CSource);
    }
    m.insert("asm", ExtensionBucket::Assembly);
    m.insert("wav", ExtensionBucket::Audio);
    m.insert("mp3", ExtensionBucket::Audio);
    m
});

/// Options that shape a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub directories_first: bool,
    /// Assign extension buckets to plain files.
    pub extension_colors: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            show_hidden: false,
            directories_first: true,
            extension_colors: true,
        }
    }
}

/// Extension bucket for `name`, matching case-sensitively on the text after
/// the last `.`. Names without a dot, or ending in one, have no bucket.
pub fn extension_bucket(name: &str) -> Option<ExtensionBucket> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    EXTENSION_BUCKETS.get(ext).copied()
}

/// Pick the display class of an entry.
pub fn classify(name: &str, kind: FileKind, executable: bool, extension_colors: bool) -> DisplayClass {
    match kind {
        FileKind::Directory => DisplayClass::Directory,
        FileKind::Symlink => DisplayClass::Symlink,
        FileKind::RegularFile if executable => DisplayClass::Executable,
        FileKind::RegularFile if extension_colors => extension_bucket(name)
            .map(DisplayClass::Extension)
            .unwrap_or(DisplayClass::Default),
        FileKind::RegularFile | FileKind::Other => DisplayClass::Default,
    }
}

/// Lists directories through a filesystem collaborator.
#[derive(Debug, Clone)]
pub struct DirectoryLister<F> {
    fs: F,
    options: ListOptions,
}

impl<F: FileSystem> DirectoryLister<F> {
    pub fn new(fs: F, options: ListOptions) -> Self {
        DirectoryLister { fs, options }
    }

    /// Read `path` and return a fresh, sorted listing.
    ///
    /// Entries that vanish or cannot be stat'ed between `readdir` and `stat`
    /// are skipped rather than failing the whole listing.
    pub fn list(&self, path: &Path) -> Result<DirectoryListing, ListError> {
        let not_accessible = |source| ListError::NotAccessible {
            path: path.to_path_buf(),
            source,
        };

        let meta = self.fs.metadata(path).map_err(not_accessible)?;
        if meta.kind != FileKind::Directory {
            return Err(ListError::NotADirectory(path.to_path_buf()));
        }
        let names = self.fs.read_dir_names(path).map_err(not_accessible)?;

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            if name.starts_with(HIDDEN_MARKER) && !self.options.show_hidden {
                continue;
            }
            let full = path.join(&name);
            let st = match self.fs.symlink_metadata(&full) {
                Ok(st) => st,
                Err(e) => {
                    debug!("skipping {}: {}", full.display(), e);
                    continue;
                }
            };
            let executable = st.kind == FileKind::RegularFile && self.fs.is_executable(&full);
            let display_class = classify(&name, st.kind, executable, self.options.extension_colors);
            records.push(FileRecord {
                name,
                kind: st.kind,
                size: st.size,
                owner: st.owner,
                executable,
                display_class,
            });
        }

        debug!("listed {} entries in {}", records.len(), path.display());
        Ok(DirectoryListing::new(records, self.options.directories_first))
    }
}
