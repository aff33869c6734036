use tracing::trace;

use crate::app::settings::keybinds;
use crate::app::App;
use crate::fs_op::{EditorLauncher, FileSystem};
use crate::input::KeyEvent;

/// Dispatch one key press. Returns `true` while the browser keeps running.
pub fn handle_key<F: FileSystem>(
    app: &mut App<F>,
    key: &KeyEvent,
    launcher: &mut dyn EditorLauncher,
) -> bool {
    match keybinds::command_for(key) {
        Some(cmd) => app.apply(cmd, launcher),
        None => trace!("unbound key {:?}", key.code),
    }
    app.is_running()
}
