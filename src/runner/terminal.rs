use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::io::{self, Stdout};
use std::path::Path;
use thiserror::Error;

use crate::app::core::viewport::ViewModel;
use crate::fs_op::{EditorLauncher, ProcessLauncher};
use crate::ui;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Raw-mode terminal with an inline viewport of fixed height.
///
/// The browser draws in place below the shell prompt instead of switching
/// to the alternate screen. Raw mode is released when the session is
/// dropped, whichever way the loop ends.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Enter raw mode and reserve `height` lines (header plus rows).
    pub fn start(height: u16) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let backend = CrosstermBackend::new(io::stdout());
        let options = TerminalOptions {
            viewport: Viewport::Inline(height),
        };
        match Terminal::with_options(backend, options) {
            Ok(terminal) => Ok(TerminalSession { terminal }),
            Err(e) => {
                let _ = restore_terminal();
                Err(TerminalError::Io(e))
            }
        }
    }

    /// Render one frame over the reserved block.
    pub fn draw(&mut self, vm: &ViewModel) -> Result<(), TerminalError> {
        self.terminal.draw(|f| ui::draw(f, vm))?;
        Ok(())
    }

    /// Leave the last frame on screen and put the cursor below it.
    pub fn finish(mut self) -> Result<(), TerminalError> {
        let area = self.terminal.get_frame().area();
        self.terminal
            .set_cursor_position(Position::new(0, area.bottom().saturating_sub(1)))?;
        self.terminal.show_cursor()?;
        execute!(self.terminal.backend_mut(), Print("\r\n"))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Disable raw mode and show the cursor. Safe to call more than once.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show)?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Restore the terminal and exit on SIGINT/SIGTERM/SIGHUP.
pub fn install_signal_handler() -> Result<(), TerminalError> {
    ctrlc::set_handler(|| {
        let _ = restore_terminal();
        std::process::exit(130);
    })?;
    Ok(())
}

/// Editor launcher that hands the terminal back in cooked mode first.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEditor;

impl EditorLauncher for TerminalEditor {
    fn open(&mut self, editor_command: &str, path: &Path) {
        if let Err(e) = restore_terminal() {
            tracing::warn!("failed to leave raw mode before editor: {}", e);
        }
        ProcessLauncher.open(editor_command, path);
    }
}
