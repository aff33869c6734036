use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while listing a directory.
///
/// Neither variant is fatal to the browser: a failed directory change is
/// rolled back and browsing continues.
#[derive(Error, Debug)]
pub enum ListError {
    /// The path could not be read (permissions, missing path, I/O failure).
    #[error("cannot read `{}`: {source}", .path.display())]
    NotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a directory.
    #[error("not a directory: `{}`", .0.display())]
    NotADirectory(PathBuf),
}

impl ListError {
    /// Path the failed operation was targeting.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ListError::NotAccessible { path, .. } => path,
            ListError::NotADirectory(path) => path,
        }
    }
}
