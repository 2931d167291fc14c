use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::view::CategoryFilter;
use crate::tui::app::{App, FormField, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.visible_items().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),

        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            app.status = None;
            app.toggle_selected();
        }

        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.status = None;
            app.form.focus_field(FormField::Name);
            app.mode = Mode::Form;
        }

        KeyCode::Char('f') => app.open_picker(),
        KeyCode::Char('F') | KeyCode::Char('0') => app.set_filter(CategoryFilter::All),

        _ => {}
    }
}
