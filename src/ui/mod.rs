use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::app::core::viewport::{ViewModel, ViewRow};

pub mod colors;
pub mod header;

pub use colors::Colors;
pub use header::render_header;

/// Render one entry row. The selected row gets a `>` marker, an underlined
/// name and the `<< size | owner` detail.
pub fn render_row<'a>(row: &'a ViewRow, colors: &Colors) -> Line<'a> {
    if row.selected {
        let mut spans = vec![
            Span::styled(">", colors::style_for(row.class)),
            Span::raw(" "),
            Span::styled(row.text.as_str(), colors::selected_style_for(row.class)),
            Span::raw(" "),
        ];
        if let Some(detail) = &row.detail {
            spans.push(Span::styled(" << ", colors.separator_style));
            spans.push(Span::styled(detail.size.as_str(), colors.size_style));
            spans.push(Span::styled(" | ", colors.separator_style));
            spans.push(Span::styled(detail.owner.as_str(), colors.owner_style));
        }
        Line::from(spans).style(colors.selected_row_style)
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(row.text.as_str(), colors::style_for(row.class)),
        ])
    }
}

/// Draw the whole frame: header on the first line, rows below.
///
/// The area is cleared first, so lines left over from a longer previous
/// listing disappear.
pub fn draw(f: &mut Frame, vm: &ViewModel) {
    let area = f.area();
    f.render_widget(Clear, area);
    let colors = Colors::default();

    let mut lines = Vec::with_capacity(vm.line_count());
    lines.push(render_header(vm, &colors));
    lines.extend(vm.rows.iter().map(|r| render_row(r, &colors)));

    let height = (vm.line_count() as u16).min(area.height);
    let target = Rect::new(area.x, area.y, area.width, height);
    f.render_widget(Paragraph::new(lines), target);
}
