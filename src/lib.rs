pub mod app;
pub mod errors;
pub mod fs_op;
pub mod input;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{App, Command, DisplayClass, FileKind, FileRecord, Settings};
pub use crate::fs_op::{DirectoryListing, ListError};
