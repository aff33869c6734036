pub mod editor;
pub mod error;
pub mod lister;
pub mod listing;
// In-memory filesystem for tests. Enabled via the `test-helpers` feature so
// release builds don't carry it.
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod sort;
pub mod stat;

pub use editor::{EditorLauncher, ProcessLauncher};
pub use error::ListError;
pub use lister::{DirectoryLister, ListOptions};
pub use listing::DirectoryListing;
#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemFs;
pub use stat::{FileStat, FileSystem, LocalFs};
