use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

const POPUP_WIDTH: u16 = 32;

/// Render the category selector centered over `area`
pub fn render_picker_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(picker) = app.picker.as_mut() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;

    let width = POPUP_WIDTH.min(area.width);
    let height = (picker.options.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    // Keep the cursor inside the popup
    let rows = height.saturating_sub(2) as usize;
    if picker.cursor < picker.scroll_offset {
        picker.scroll_offset = picker.cursor;
    } else if rows > 0 && picker.cursor >= picker.scroll_offset + rows {
        picker.scroll_offset = picker.cursor + 1 - rows;
    }

    let inner_width = width.saturating_sub(2) as usize;
    let lines: Vec<Line> = picker
        .options
        .iter()
        .enumerate()
        .skip(picker.scroll_offset)
        .take(rows)
        .map(|(i, option)| {
            let is_cursor = i == picker.cursor;
            let row_bg = if is_cursor { theme.selection_bg } else { bg };
            let text_style = if is_cursor {
                Style::default()
                    .fg(theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).bg(row_bg)
            };
            let (swatch, label) = if option.is_empty() {
                (Span::styled("  ", Style::default().bg(row_bg)), "All")
            } else {
                (
                    Span::styled(
                        "\u{25A0} ",
                        Style::default()
                            .fg(theme.category_color(option))
                            .bg(row_bg),
                    ),
                    option.as_str(),
                )
            };
            Line::from(vec![
                Span::styled(" ", Style::default().bg(row_bg)),
                swatch,
                Span::styled(
                    truncate_to_width(label, inner_width.saturating_sub(3)),
                    text_style,
                ),
            ])
            .style(Style::default().bg(row_bg))
        })
        .collect();

    let block = Block::default()
        .title(" Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
