pub mod form_row;
pub mod header;
pub mod list_view;
pub mod picker_popup;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::App;
use crate::util::unicode;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | list | add form | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    form_row::render_form_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Category selector (rendered on top of everything)
    if app.picker.is_some() {
        picker_popup::render_picker_popup(frame, app, area);
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Fill the gap between left-aligned `spans` and a right-aligned `right` part
pub(super) fn push_right_aligned<'a>(
    spans: &mut Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    fill: Style,
) {
    let used = spans_width(spans) + spans_width(&right);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), fill));
        spans.extend(right);
    }
}
