//! Projection of the navigation state onto the rows the renderer draws.

use crate::app::core::navigation::NavigationState;
use crate::app::types::{DisplayClass, FileRecord};
use crate::fs_op::DirectoryListing;

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// Index of the entry in the full listing.
    pub index: usize,
    pub text: String,
    pub class: DisplayClass,
    pub selected: bool,
    /// Size and owner, only filled in for the selected row.
    pub detail: Option<RowDetail>,
}

/// Extra columns shown next to the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDetail {
    pub size: String,
    /// Owner name, `?` when unknown.
    pub owner: String,
}

/// Everything the render sink needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub header: String,
    pub rows: Vec<ViewRow>,
    /// Configured window size; the sink owns `visible_rows + 1` lines.
    pub visible_rows: usize,
    /// Short message about the last failed command, if any.
    pub status: Option<String>,
}

impl ViewModel {
    /// Number of terminal lines the frame occupies (header plus rows).
    pub fn line_count(&self) -> usize {
        self.visible_rows + 1
    }

    pub fn selected_row(&self) -> Option<&ViewRow> {
        self.rows.iter().find(|r| r.selected)
    }
}

/// Size and owner detail of the selected entry.
pub fn row_detail(record: &FileRecord) -> RowDetail {
    RowDetail {
        size: record.size.to_string(),
        owner: record.owner.clone().unwrap_or_else(|| "?".to_string()),
    }
}

/// Build the view model for `nav` over `listing`.
pub fn project(nav: &NavigationState, listing: &DirectoryListing) -> ViewModel {
    let len = listing.len();
    let count = nav.visible_rows.min(len);
    let header = format!(
        "{}/{}  {}",
        nav.offset,
        len.saturating_sub(nav.visible_rows),
        nav.current_path.display()
    );
    let rows = listing
        .iter()
        .enumerate()
        .skip(nav.offset)
        .take(count)
        .map(|(index, record)| {
            let selected = index == nav.selected;
            ViewRow {
                index,
                text: record.name.clone(),
                class: record.display_class,
                selected,
                detail: selected.then(|| row_detail(record)),
            }
        })
        .collect();
    ViewModel {
        header,
        rows,
        visible_rows: nav.visible_rows,
        status: None,
    }
}
