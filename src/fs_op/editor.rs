//! Launching the external editor.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::{info, warn};

/// Opens a file in an external program.
///
/// Calls are synchronous from the caller's point of view, and the outcome is
/// not reported back: failures are logged by the implementation.
pub trait EditorLauncher {
    fn open(&mut self, editor_command: &str, path: &Path);
}

/// Split an editor command such as `"code --wait"` into program and args.
/// Returns `None` for a blank command.
pub fn split_command(editor_command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = editor_command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run `editor_command path` and wait for it to exit.
pub fn run_editor(editor_command: &str, path: &Path) -> io::Result<ExitStatus> {
    let (program, args) = split_command(editor_command).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "empty editor command")
    })?;
    Command::new(program).args(args).arg(path).status()
}

/// Launches the editor as a child process inheriting the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl EditorLauncher for ProcessLauncher {
    fn open(&mut self, editor_command: &str, path: &Path) {
        info!("opening {} with `{}`", path.display(), editor_command);
        match run_editor(editor_command, path) {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("editor `{}` exited with {}", editor_command, status),
            Err(e) => warn!("failed to launch editor `{}`: {}", editor_command, e),
        }
    }
}
