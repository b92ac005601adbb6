//! Key handling for the list view and the editor popup

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::editor::EditorField;
use crate::app::state::App;

/// Route a key press to the editor popup or the list view
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.editor.is_some() {
        handle_editor_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            app.list.toggle(app.selected);
            app.persist();
        }
        KeyCode::Char('a') => app.open_create_editor(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_editor(),
        KeyCode::Char('d') => {
            if app.list.remove(app.selected).is_some() {
                app.clamp_selection();
                app.persist();
            }
        }
        KeyCode::Char('D') => {
            if !app.list.is_empty() {
                app.list.clear();
                app.clamp_selection();
                app.persist();
            }
        }
        KeyCode::Char('A') => {
            if !app.list.is_empty() {
                app.list.toggle_all();
                app.persist();
            }
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if let Some(ref mut editor) = app.editor {
        editor.validation = None;
    }

    match key.code {
        KeyCode::Esc => {
            // First Esc dismisses suggestions, second closes the editor
            if app.suggestions.loading {
                app.suggestions.cancel_in_flight_request();
                app.suggestions.clear();
            } else if !app.suggestions.options.is_empty()
                || app.suggestions.error.is_some()
                || app.suggestions.empty_result
            {
                app.suggestions.clear();
            } else {
                app.close_editor();
            }
        }
        KeyCode::Tab => {
            if let Some(ref mut editor) = app.editor {
                editor.focus_next();
            }
        }
        KeyCode::BackTab => {
            if let Some(ref mut editor) = app.editor {
                editor.focus_previous();
            }
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(ref mut editor) = app.editor {
                editor.cycle_color();
            }
        }
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            request_suggestions(app);
        }
        KeyCode::Up => app.suggestions.select_previous(),
        KeyCode::Down => app.suggestions.select_next(),
        KeyCode::Enter => {
            if let Some(option) = app.suggestions.selected_option().map(str::to_string) {
                if let Some(ref mut editor) = app.editor {
                    editor.set_title(&option);
                }
                app.suggestions.clear();
            } else {
                app.save_editor();
            }
        }
        _ => forward_to_field(app, key),
    }
}

/// Send the current title to the worker for rephrasing
fn request_suggestions(app: &mut App) {
    if !app.suggestions.enabled {
        return;
    }
    let Some(ref editor) = app.editor else {
        return;
    };
    let title = editor.title_text().trim().to_string();
    if title.is_empty() {
        return;
    }
    app.suggestions.send_request(title);
}

/// Forward an ordinary key to the focused text field
///
/// Editing the title invalidates whatever the panel was showing, so stale
/// options never get applied to text they were not generated for.
fn forward_to_field(app: &mut App, key: KeyEvent) {
    let Some(ref mut editor) = app.editor else {
        return;
    };

    let editing_title = editor.field == EditorField::Title;
    let before = editing_title.then(|| editor.title_text().to_string());
    editor.active_field_mut().input(key);

    if let Some(before) = before
        && editor.title_text() != before
    {
        app.suggestions.cancel_in_flight_request();
        app.suggestions.clear();
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
