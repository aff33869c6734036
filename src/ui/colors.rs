use ratatui::style::{Color, Modifier, Style};

use crate::app::types::{DisplayClass, ExtensionBucket};

/// Styles used by the browser frame.
#[derive(Clone, Debug)]
pub struct Colors {
    pub header_style: Style,
    pub bracket_style: Style,
    pub status_style: Style,
    pub selected_row_style: Style,
    pub size_style: Style,
    pub owner_style: Style,
    pub separator_style: Style,
}

impl Default for Colors {
    fn default() -> Self {
        let dim_bg = Color::Indexed(233);
        Colors {
            header_style: Style::default().bg(dim_bg).fg(Color::Red),
            bracket_style: Style::default().bg(dim_bg).fg(Color::DarkGray),
            status_style: Style::default().bg(dim_bg).fg(Color::Yellow),
            selected_row_style: Style::default().bg(dim_bg),
            size_style: Style::default().fg(Color::Indexed(30)),
            owner_style: Style::default().fg(Color::Indexed(71)),
            separator_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// 256-color palette index of an extension bucket.
pub fn bucket_color(bucket: ExtensionBucket) -> u8 {
    match bucket {
        ExtensionBucket::Object => 94,
        ExtensionBucket::CSource => 99,
        ExtensionBucket::Assembly => 131,
        ExtensionBucket::Audio => 1,
    }
}

/// Name style for an entry of the given display class.
pub fn style_for(class: DisplayClass) -> Style {
    match class {
        DisplayClass::Directory => Style::default().fg(Color::Blue),
        DisplayClass::Executable => Style::default().fg(Color::Green),
        DisplayClass::Symlink => Style::default().fg(Color::Cyan),
        DisplayClass::Extension(b) => Style::default().fg(Color::Indexed(bucket_color(b))),
        DisplayClass::Default => Style::default(),
    }
}

/// Name style for the highlighted entry: the class color, underlined.
pub fn selected_style_for(class: DisplayClass) -> Style {
    style_for(class).add_modifier(Modifier::UNDERLINED)
}
