use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Item;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, pad_to_width, truncate_to_width};

/// Cells used by everything on a row except the name and badge text:
/// cursor bar, checkbox, gap, badge padding
const ROW_CHROME: usize = 1 + 4 + 2 + 2;

/// Render the filtered item list
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible = app.visible_items();
    app.clamp_cursor();

    if visible.is_empty() {
        let text = match app.filter.category() {
            Some(c) => format!(" No items in {}", c),
            None => " No items. Press a to add one.".to_string(),
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the cursor on screen
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let width = area.width as usize;
    let badge_width = visible
        .values()
        .map(|item| display_width(&item.category))
        .max()
        .unwrap_or(0);
    let name_width = visible
        .keys()
        .map(|k| display_width(k))
        .max()
        .unwrap_or(0)
        .min(width.saturating_sub(ROW_CHROME + badge_width));

    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, (key, item))| {
            let is_cursor = i == app.cursor && app.mode != Mode::Form;
            render_item_line(app, key, item, name_width, is_cursor)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_item_line<'a>(
    app: &App,
    key: &str,
    item: &Item,
    name_width: usize,
    is_cursor: bool,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let crossed = if item.done {
        Modifier::CROSSED_OUT
    } else {
        Modifier::empty()
    };

    let bar = if is_cursor { "\u{258E}" } else { " " };
    let check_color = if item.done { theme.green } else { theme.text };
    let name_color = match (item.done, is_cursor) {
        (true, _) => theme.dim,
        (false, true) => theme.text_bright,
        (false, false) => theme.text,
    };
    let name = pad_to_width(&truncate_to_width(key, name_width), name_width);

    let spans = vec![
        Span::styled(bar, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(
            format!("[{}] ", item.checkbox_char()),
            Style::default().fg(check_color).bg(bg),
        ),
        Span::styled(
            name,
            Style::default().fg(name_color).bg(bg).add_modifier(crossed),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            format!(" {} ", item.category),
            Style::default()
                .fg(theme.category_fg(&item.category))
                .bg(theme.category_color(&item.category))
                .add_modifier(crossed),
        ),
    ];
    Line::from(spans).style(Style::default().bg(bg))
}
