use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FormField, Mode};
use crate::util::unicode::{delete_prev_grapheme, next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            // The status row already shows the reason; the form keeps its text
            if let Err(e) = app.submit_form() {
                log::debug!("event=form_rejected reason={}", e);
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            let next = match app.form.focus {
                FormField::Name => FormField::Category,
                FormField::Category => FormField::Name,
            };
            app.form.focus_field(next);
        }
        KeyCode::Backspace => {
            let cursor = app.form.cursor;
            app.form.cursor = delete_prev_grapheme(app.form.field_mut(), cursor);
        }
        KeyCode::Left => {
            if let Some(pos) = prev_grapheme_boundary(app.form.field(), app.form.cursor) {
                app.form.cursor = pos;
            }
        }
        KeyCode::Right => {
            if let Some(pos) = next_grapheme_boundary(app.form.field(), app.form.cursor) {
                app.form.cursor = pos;
            }
        }
        KeyCode::Home => app.form.cursor = 0,
        KeyCode::End => app.form.cursor = app.form.field().len(),
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let cursor = app.form.cursor;
            app.form.field_mut().insert(cursor, c);
            app.form.cursor += c.len_utf8();
        }
        _ => {}
    }
}
