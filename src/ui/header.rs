use ratatui::text::{Line, Span};

use crate::app::core::viewport::ViewModel;
use crate::ui::colors::Colors;

/// Header line: `[  position/range  path  ]`, followed by the status
/// indicator when the last command failed.
pub fn render_header<'a>(vm: &'a ViewModel, colors: &Colors) -> Line<'a> {
    let mut spans = vec![
        Span::styled("[", colors.bracket_style),
        Span::styled(format!("    {}    ", vm.header), colors.header_style),
        Span::styled("]", colors.bracket_style),
    ];
    if let Some(status) = &vm.status {
        spans.push(Span::styled(format!(" {} ", status), colors.status_style));
    }
    Line::from(spans)
}
