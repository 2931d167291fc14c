use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FormField, Mode};
use crate::util::unicode::{display_width, pad_to_width, scroll_window, truncate_to_width};

const PREFIX: &str = " + ";
const NAME_LABEL: &str = "name ";
const CATEGORY_LABEL: &str = "  category ";
/// Fields never render narrower than this
const MIN_FIELD_WIDTH: usize = 12;

/// What one field shows once fitted to the row
struct FieldView {
    text: String,
    cells: usize,
    /// Cursor column inside the field
    cursor: usize,
}

/// Render the add form: a name field and a category field
pub fn render_form_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active = app.mode == Mode::Form;
    let form = &app.form;
    let (name, category) = fit_fields(app, area.width as usize);

    let field_style = |field: FormField| {
        if active && form.focus == field {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
        } else {
            Style::default()
                .fg(app.theme.text)
                .bg(bg)
                .add_modifier(Modifier::UNDERLINED)
        }
    };
    let prefix_color = if active {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let label_style = Style::default().fg(app.theme.dim).bg(bg);

    let spans = vec![
        Span::styled(
            PREFIX,
            Style::default()
                .fg(prefix_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(NAME_LABEL, label_style),
        Span::styled(
            pad_to_width(&name.text, name.cells),
            field_style(FormField::Name),
        ),
        Span::styled(CATEGORY_LABEL, label_style),
        Span::styled(
            pad_to_width(&category.text, category.cells),
            field_style(FormField::Category),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if active {
        let x = cursor_column(app, area.width as usize);
        if x < area.width as usize {
            frame.set_cursor_position((area.x + x as u16, area.y));
        }
    }
}

fn field_width(text: &str) -> usize {
    (display_width(text) + 1).max(MIN_FIELD_WIDTH)
}

fn name_start() -> usize {
    display_width(PREFIX) + display_width(NAME_LABEL)
}

/// Fit `text` into at most `max_cells`. The focused field scrolls to keep the
/// cursor visible; an unfocused one is cut with an ellipsis.
fn fit_field(text: &str, cursor: Option<usize>, max_cells: usize) -> FieldView {
    let cells = field_width(text).min(max_cells.max(1));
    match cursor {
        Some(cursor) => {
            let cursor = cursor.min(text.len());
            let (start, end) = scroll_window(text, cursor, cells);
            FieldView {
                text: text[start..end].to_string(),
                cells,
                cursor: display_width(&text[start..cursor]),
            }
        }
        None => FieldView {
            text: truncate_to_width(text, cells),
            cells,
            cursor: 0,
        },
    }
}

/// Lay out both fields in a row `width` cells wide. While the category is
/// being edited the name gives up room so the category stays on screen.
fn fit_fields(app: &App, width: usize) -> (FieldView, FieldView) {
    let form = &app.form;
    let editing = app.mode == Mode::Form;
    let cursor_in = |field: FormField| (editing && form.focus == field).then_some(form.cursor);
    let label = display_width(CATEGORY_LABEL);

    let name_max = if editing && form.focus == FormField::Category {
        width.saturating_sub(name_start() + label + MIN_FIELD_WIDTH)
    } else {
        width.saturating_sub(name_start())
    };
    let name = fit_field(&form.name, cursor_in(FormField::Name), name_max);
    let category_max = width.saturating_sub(name_start() + name.cells + label);
    let category = fit_field(&form.category, cursor_in(FormField::Category), category_max);
    (name, category)
}

/// Column of the text cursor inside a form row `width` cells wide
pub fn cursor_column(app: &App, width: usize) -> usize {
    let (name, category) = fit_fields(app, width);
    match app.form.focus {
        FormField::Name => name_start() + name.cursor,
        FormField::Category => {
            name_start() + name.cells + display_width(CATEGORY_LABEL) + category.cursor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;

    #[test]
    fn test_form_row_shows_fields() {
        let mut app = app_with_seed();
        app.form.name = "buy milk".into();
        app.form.category = "home".into();
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_form_row(frame, &app, area);
        });
        assert_eq!(out, " + name buy milk      category home");
    }

    #[test]
    fn test_cursor_column() {
        let mut app = app_with_seed();
        app.mode = Mode::Form;
        app.form.name = "milk".into();
        app.form.focus_field(FormField::Name);
        assert_eq!(cursor_column(&app, 80), 8 + 4);

        app.form.focus_field(FormField::Category);
        // prefix + label (8) + name field (12) + category label (11)
        assert_eq!(cursor_column(&app, 80), 8 + 12 + 11);
    }

    #[test]
    fn test_long_name_scrolls_with_cursor() {
        let mut app = app_with_seed();
        app.mode = Mode::Form;
        app.form.name = "abcdefghijklmnopqrstuvwxyz0123456789".into();
        app.form.focus_field(FormField::Name);

        let out = render_to_string(30, 1, |frame, area| {
            render_form_row(frame, &app, area);
        });
        assert_eq!(out, " + name pqrstuvwxyz0123456789");
        assert_eq!(cursor_column(&app, 30), 29);

        app.form.cursor = 0;
        let out = render_to_string(30, 1, |frame, area| {
            render_form_row(frame, &app, area);
        });
        assert_eq!(out, " + name abcdefghijklmnopqrstuv");
        assert_eq!(cursor_column(&app, 30), 8);
    }

    #[test]
    fn test_long_name_yields_to_category() {
        let mut app = app_with_seed();
        app.mode = Mode::Form;
        app.form.name = "abcdefghijklmnopqrstuvwxyz0123456789".into();
        app.form.category = "home".into();
        app.form.focus_field(FormField::Category);

        // Name squeezed to 40 - (8 + 11 + 12) = 9 cells
        let out = render_to_string(40, 1, |frame, area| {
            render_form_row(frame, &app, area);
        });
        assert_eq!(out, " + name abcdefgh\u{2026}  category home");
        assert_eq!(cursor_column(&app, 40), 8 + 9 + 11 + 4);
    }
}
