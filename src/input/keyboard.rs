// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;

/// Block until the next key press and return it.
///
/// Non-key events (resize, focus, mouse) and key releases are skipped so a
/// single physical key press produces exactly one command. There is no
/// timeout: the browser waits for the user indefinitely.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

