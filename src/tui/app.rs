use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indexmap::IndexMap;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::LoadedConfig;
use crate::model::{Item, UiConfig};
use crate::ops::store::{Command, CommandError, TaskStore};
use crate::ops::view::{self, CategoryFilter};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add form
    Form,
    /// Category selector open
    Picker,
}

/// Which add-form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Category,
}

/// The add form: two text fields and a cursor in the focused one
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub category: String,
    pub focus: FormField,
    /// Byte offset into the focused field
    pub cursor: usize,
}

impl FormState {
    pub fn field(&self) -> &str {
        match self.focus {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
        }
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
        }
    }

    /// Move focus to `field`, cursor at its end
    pub fn focus_field(&mut self, field: FormField) {
        self.focus = field;
        self.cursor = self.field().len();
    }

    pub fn clear(&mut self) {
        *self = FormState::default();
    }
}

/// Category selector: "All" followed by the categories in use
#[derive(Debug, Clone)]
pub struct PickerState {
    /// `options[0]` is the empty selection (All)
    pub options: Vec<String>,
    pub cursor: usize,
    /// First visible option
    pub scroll_offset: usize,
}

/// One-line feedback shown in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub filter: CategoryFilter,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the visible list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub form: FormState,
    pub picker: Option<PickerState>,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: TaskStore, ui: &UiConfig) -> Self {
        App {
            store,
            filter: CategoryFilter::All,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            form: FormState::default(),
            picker: None,
            status: None,
        }
    }

    /// Items passing the current filter, recomputed from the store
    pub fn visible_items(&self) -> IndexMap<String, Item> {
        view::filter(self.store.current().items(), self.filter.category())
    }

    /// Key of the item under the cursor
    pub fn selected_key(&self) -> Option<String> {
        self.visible_items()
            .get_index(self.cursor)
            .map(|(key, _)| key.clone())
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    /// Flip the item under the cursor, using its state as currently shown
    pub fn toggle_selected(&mut self) {
        let Some(key) = self.selected_key() else {
            return;
        };
        match Command::toggle_observed(self.store.current(), &key) {
            Ok(cmd) => {
                self.store.dispatch(&cmd);
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    /// Submit the add form. Empty fields are rejected and nothing is dispatched.
    pub fn submit_form(&mut self) -> Result<(), CommandError> {
        let cmd = match Command::add_checked(&self.form.name, &self.form.category) {
            Ok(cmd) => cmd,
            Err(e) => {
                self.set_status(e.to_string(), true);
                return Err(e);
            }
        };
        let key = cmd.key().to_string();
        let replaced = self.store.current().contains(&key);
        self.store.dispatch(&cmd);

        if replaced {
            self.set_status(format!("replaced \"{}\"", key), false);
        } else {
            self.set_status(format!("added \"{}\"", key), false);
        }
        if let Some(idx) = self.visible_items().get_index_of(&key) {
            self.cursor = idx;
        }
        self.form.clear();
        Ok(())
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if filter != self.filter {
            log::debug!("event=filter_change filter={:?}", filter.label());
        }
        self.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Open the category selector with the cursor on the active filter
    pub fn open_picker(&mut self) {
        let mut options = vec![String::new()];
        options.extend(view::distinct_categories(self.store.current().items()));
        let cursor = match self.filter.category() {
            Some(c) => options.iter().position(|o| o == c).unwrap_or(0),
            None => 0,
        };
        self.picker = Some(PickerState {
            options,
            cursor,
            scroll_offset: 0,
        });
        self.mode = Mode::Picker;
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application
pub fn run(loaded: &LoadedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::new(&loaded.config.seed_items());
    log::info!("event=tui_start items={}", store.len());
    let mut app = App::new(store, &loaded.config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the default hook prints
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("event=tui_exit items={}", app.store.len());

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::default_seed;

    fn app() -> App {
        App::new(TaskStore::new(&default_seed()), &UiConfig::default())
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app();
        app.cursor = 2;
        app.toggle_selected();
        assert!(app.store.get("vacuum").unwrap().done);
        app.toggle_selected();
        assert!(!app.store.get("vacuum").unwrap().done);
    }

    #[test]
    fn test_toggle_on_empty_list_is_noop() {
        let mut app = App::new(TaskStore::default(), &UiConfig::default());
        app.toggle_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_submit_form_adds_and_clears() {
        let mut app = app();
        app.form.name = "buy milk".into();
        app.form.category = "home".into();
        app.form.focus_field(FormField::Category);

        app.submit_form().unwrap();
        assert_eq!(app.store.get("buy milk"), Some(&Item::new("home")));
        assert!(app.form.name.is_empty());
        assert!(app.form.category.is_empty());
        assert_eq!(app.form.focus, FormField::Name);
        assert_eq!(app.cursor, 3);
        assert_eq!(app.status.as_ref().unwrap().text, "added \"buy milk\"");
    }

    #[test]
    fn test_submit_form_rejects_empty_category() {
        let mut app = app();
        app.form.name = "buy milk".into();

        assert_eq!(
            app.submit_form(),
            Err(CommandError::EmptyField("category"))
        );
        assert_eq!(app.store.len(), 3);
        assert_eq!(app.form.name, "buy milk");
        assert!(app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_submit_form_reports_replace() {
        let mut app = app();
        app.form.name = "write report".into();
        app.form.category = "work".into();
        app.submit_form().unwrap();
        assert!(!app.store.get("write report").unwrap().done);
        assert_eq!(app.status.as_ref().unwrap().text, "replaced \"write report\"");
    }

    #[test]
    fn test_filter_changes_visible_items() {
        let mut app = app();
        app.cursor = 2;
        app.set_filter(CategoryFilter::from_selection("work"));
        assert_eq!(app.cursor, 0);
        let keys: Vec<String> = app.visible_items().keys().cloned().collect();
        assert_eq!(keys, vec!["write report"]);
        assert_eq!(app.selected_key().as_deref(), Some("write report"));
    }

    #[test]
    fn test_open_picker_lists_all_then_categories() {
        let mut app = app();
        app.set_filter(CategoryFilter::from_selection("work"));
        app.open_picker();
        let picker = app.picker.as_ref().unwrap();
        assert_eq!(picker.options, vec!["", "home", "work"]);
        assert_eq!(picker.cursor, 2);
        assert_eq!(app.mode, Mode::Picker);
    }
}
