use std::ops::Index;
use std::slice;

use crate::app::types::FileRecord;
use crate::fs_op::sort;

/// Ordered snapshot of one directory.
///
/// The only way to build one is through [`DirectoryListing::new`], which
/// applies the directory ordering policy, so an unsorted listing never
/// reaches the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    entries: Vec<FileRecord>,
}

impl DirectoryListing {
    pub fn new(records: Vec<FileRecord>, directories_first: bool) -> Self {
        DirectoryListing {
            entries: sort::sorted(records, directories_first),
        }
    }

    pub fn empty() -> Self {
        DirectoryListing::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileRecord> {
        self.entries.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&FileRecord> {
        self.entries.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> slice::Iter<'_, FileRecord> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FileRecord] {
        &self.entries
    }
}

impl Index<usize> for DirectoryListing {
    type Output = FileRecord;

    fn index(&self, index: usize) -> &FileRecord {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a DirectoryListing {
    type Item = &'a FileRecord;
    type IntoIter = slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
