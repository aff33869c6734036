pub mod keyboard;

pub use keyboard::{read_key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
