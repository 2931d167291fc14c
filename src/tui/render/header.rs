use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::push_right_aligned;

/// Render the title and the active category filter
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let total = app.store.len();
    let done = app
        .store
        .current()
        .items()
        .values()
        .filter(|item| item.done)
        .count();

    let mut spans = vec![
        Span::styled(
            " TODO",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} done", done, total),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    let filter_color = match app.filter.category() {
        Some(c) => app.theme.category_color(c),
        None => app.theme.text,
    };
    let right = vec![
        Span::styled("Category: ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            format!("{} ", app.filter.label()),
            Style::default().fg(filter_color).bg(bg),
        ),
    ];
    push_right_aligned(&mut spans, right, area.width as usize, Style::default().bg(bg));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
