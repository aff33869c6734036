pub mod keybinds;

pub use keybinds::command_for;

use crate::fs_op::ListOptions;

/// Default number of entries visible at once.
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 20;
/// Editor used when neither `VISUAL` nor `EDITOR` is set.
pub const FALLBACK_EDITOR: &str = "vim";

/// Startup options. Built once and handed to the `App`; never reloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How many entries are visible at a time (at least 1).
    pub max_visible_rows: usize,
    /// Show entries whose name starts with `.`.
    pub show_hidden: bool,
    /// List directories before other entries (after them when false).
    pub directories_first: bool,
    /// Command used to open files; the file path is appended as last argument.
    pub editor_command: String,
    /// Color plain files by their extension.
    pub extension_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            show_hidden: false,
            directories_first: true,
            editor_command: FALLBACK_EDITOR.to_string(),
            extension_colors: true,
        }
    }
}

impl Settings {
    /// Defaults, with the editor taken from `VISUAL` or `EDITOR` when set.
    pub fn from_env() -> Self {
        let editor = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|k| std::env::var(k).ok())
            .find(|v| !v.trim().is_empty());
        let mut s = Settings::default();
        if let Some(editor) = editor {
            s.editor_command = editor;
        }
        s
    }

    /// Visible rows clamped to a positive value.
    pub fn visible_rows(&self) -> usize {
        self.max_visible_rows.max(1)
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.show_hidden,
            directories_first: self.directories_first,
            extension_colors: self.extension_colors,
        }
    }
}
