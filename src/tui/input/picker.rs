use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::view::CategoryFilter;
use crate::tui::app::App;

pub(super) fn handle_picker(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker.as_mut() else {
        app.close_picker();
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_picker(),
        KeyCode::Char('j') | KeyCode::Down => {
            if picker.cursor + 1 < picker.options.len() {
                picker.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            picker.cursor = picker.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let selection = picker.options.get(picker.cursor).cloned().unwrap_or_default();
            app.close_picker();
            app.set_filter(CategoryFilter::from_selection(&selection));
        }
        _ => {}
    }
}
