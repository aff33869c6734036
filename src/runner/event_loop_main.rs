use anyhow::Context;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::app::settings::Settings;
use crate::app::App;
use crate::fs_op::LocalFs;
use crate::input::read_key;
use crate::runner::handlers;
use crate::runner::terminal::{self, TerminalEditor, TerminalSession};

/// Browse `start` until the user exits or opens a file.
pub fn run_app(start: PathBuf, settings: Settings) -> anyhow::Result<()> {
    // The first listing happens before raw mode so a bad start directory
    // is reported as a plain error.
    let mut app = App::new(start.clone(), settings, LocalFs::new())
        .with_context(|| format!("cannot browse {}", start.display()))?;
    info!("browsing {}", start.display());

    terminal::install_panic_hook();
    if let Err(e) = terminal::install_signal_handler() {
        warn!("{}", e);
    }

    let height = u16::try_from(app.settings().visible_rows() + 1).unwrap_or(u16::MAX);
    let mut session = TerminalSession::start(height)?;
    let mut launcher = TerminalEditor;

    // One key, one command, one frame.
    while app.is_running() {
        session.draw(&app.view_model())?;
        let key = read_key()?;
        handlers::handle_key(&mut app, &key, &mut launcher);
    }

    match app.opened_file() {
        // The editor has had the terminal; there is no frame left to keep.
        Some(path) => info!("exited after opening {}", path.display()),
        None => session.finish()?,
    }
    Ok(())
}
