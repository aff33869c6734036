use std::mem;
use std::path::PathBuf;

/// Cursor, scroll window and directory bookkeeping for the browser.
///
/// Transitions keep `offset <= selected < offset + visible_rows` whenever
/// the listing is non-empty; an empty listing keeps both at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Directory currently shown.
    pub current_path: PathBuf,
    /// Directory left by the last directory change (one level only).
    pub previous_path: PathBuf,
    /// Index of the highlighted entry in the full listing.
    pub selected: usize,
    /// Index of the first visible entry.
    pub offset: usize,
    /// Size of the scroll window, always at least 1.
    pub visible_rows: usize,
    pub running: bool,
}

impl NavigationState {
    pub fn new(path: PathBuf, visible_rows: usize) -> Self {
        NavigationState {
            previous_path: path.clone(),
            current_path: path,
            selected: 0,
            offset: 0,
            visible_rows: visible_rows.max(1),
            running: true,
        }
    }

    /// Move the selection up one entry, sliding the window by one when the
    /// selection leaves it at the top.
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset -= 1;
            }
        }
    }

    /// Move the selection down one entry in a listing of `len` entries,
    /// sliding the window by one when the selection leaves it at the bottom.
    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
            let last_visible = self.offset + self.visible_rows - 1;
            if self.selected > last_visible && self.offset < len.saturating_sub(self.visible_rows) {
                self.offset += 1;
            }
        }
    }

    /// Switch to `path`: the directory being left becomes `previous_path`
    /// and the cursor returns to the top.
    pub fn enter_directory(&mut self, path: PathBuf) {
        self.previous_path = mem::replace(&mut self.current_path, path);
        self.selected = 0;
        self.offset = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the selection lies inside the visible window for a listing
    /// of `len` entries.
    pub fn selection_visible(&self, len: usize) -> bool {
        if len == 0 {
            return self.selected == 0 && self.offset == 0;
        }
        self.selected < len
            && self.offset <= self.selected
            && self.selected < self.offset + self.visible_rows
            && self.offset <= len.saturating_sub(self.visible_rows)
    }
}
