use crate::app::types::FileRecord;

/// Stable partition of `records` into directories and everything else.
///
/// With `directories_first` the directories move to the front, otherwise to
/// the back. Relative order inside each group is preserved, so sorting an
/// already sorted list is a no-op.
pub fn sort(records: &mut [FileRecord], directories_first: bool) {
    if records.len() < 2 {
        return;
    }
    // `sort_by_key` is stable; a boolean key gives exactly two groups.
    if directories_first {
        records.sort_by_key(|r| !r.is_dir());
    } else {
        records.sort_by_key(|r| r.is_dir());
    }
}

/// Owned variant of [`sort`] returning the reordered records.
pub fn sorted(mut records: Vec<FileRecord>, directories_first: bool) -> Vec<FileRecord> {
    sort(&mut records, directories_first);
    records
}
