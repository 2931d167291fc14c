use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::push_right_aligned;

/// Key hints for each mode
fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "j/k move  space toggle  a add  f filter  q quit",
        Mode::Form => "Tab switch field  Enter add  Esc done",
        Mode::Picker => "j/k move  Enter select  Esc cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(status) = &app.status {
        let color = if status.is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).bg(bg),
        ));
    }
    if app.show_key_hints {
        let hint = vec![Span::styled(
            format!("{} ", key_hints(app.mode)),
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        push_right_aligned(&mut spans, hint, width, Style::default().bg(bg));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
