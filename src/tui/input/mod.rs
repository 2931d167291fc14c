mod form;
mod navigate;
mod picker;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use form::handle_form;
use navigate::handle_navigate;
use picker::handle_picker;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Form => handle_form(app, key),
        Mode::Picker => handle_picker(app, key),
    }
}

/// Some terminals report Shift+f as lowercase with SHIFT set
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UiConfig;
    use crate::model::item::default_seed;
    use crate::ops::store::TaskStore;
    use crate::ops::view::CategoryFilter;
    use crate::tui::app::FormField;

    fn app() -> App {
        App::new(TaskStore::new(&default_seed()), &UiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_navigate_and_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.get("vacuum").unwrap().done);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Enter);
        assert!(!app.store.get("write report").unwrap().done);
    }

    #[test]
    fn test_home_end() {
        let mut app = app();
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_add_through_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Form);

        type_str(&mut app, "buy milk");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.focus, FormField::Category);
        type_str(&mut app, "home");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 4);
        assert_eq!(app.store.get("buy milk").unwrap().category, "home");
        // Form stays open and ready for the next item
        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.form.focus, FormField::Name);
        assert!(app.form.name.is_empty());

        // Typing 'q' in the form is text, not quit
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.form.name, "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_form_empty_submit_dispatches_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.len(), 3);
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_form_editing_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "milx");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "k");
        press(&mut app, KeyCode::Home);
        type_str(&mut app, "buy ");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Right);
        type_str(&mut app, "!");
        assert_eq!(app.form.name, "buy milk!");
    }

    #[test]
    fn test_picker_selects_category() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.mode, Mode::Picker);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.filter, CategoryFilter::Category("home".into()));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.picker.is_none());
        assert_eq!(app.visible_items().len(), 2);

        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.filter, CategoryFilter::All);
    }

    #[test]
    fn test_picker_escape_keeps_filter() {
        let mut app = app();
        app.set_filter(CategoryFilter::from_selection("work"));
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.filter, CategoryFilter::Category("work".into()));
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_shift_normalized() {
        let mut app = app();
        app.set_filter(CategoryFilter::from_selection("home"));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::SHIFT),
        );
        assert_eq!(app.filter, CategoryFilter::All);
        assert_eq!(app.mode, Mode::Navigate);
    }
}
