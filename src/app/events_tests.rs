//! Tests for key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ai::AiResponse;
use crate::app::editor::EditorField;
use crate::app::state::App;
use crate::app::handle_key;
use crate::config::Config;
use crate::items::Item;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn test_app() -> App {
    let config = Config::default();
    let items = vec![
        Item::new("Buy Eggos"),
        Item::new("Destroy Demogorgon"),
        Item::new("Find Mike"),
    ];
    App::new(&config, items, None)
}

fn app_with_suggestions() -> App {
    let mut app = test_app();
    app.open_create_editor();
    app.suggestions.handle_response(AiResponse::Suggestions {
        options: vec![
            "Savor those Eggos".to_string(),
            "Eggo feast awaits".to_string(),
            "Treat yourself to Eggos".to_string(),
        ],
        request_id: 0,
    });
    app
}

// ============================================================
// List view
// ============================================================

#[test]
fn test_q_quits() {
    let mut app = test_app();
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut app = test_app();
    app.open_create_editor();
    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit);
}

#[test]
fn test_j_and_k_move_selection() {
    let mut app = test_app();
    handle_key(&mut app, key(KeyCode::Char('j')));
    assert_eq!(app.selected, 1);
    handle_key(&mut app, key(KeyCode::Char('k')));
    assert_eq!(app.selected, 0);
}

#[test]
fn test_space_toggles_completion() {
    let mut app = test_app();
    handle_key(&mut app, key(KeyCode::Char(' ')));
    assert!(app.list.get(0).unwrap().completed);
}

#[test]
fn test_d_deletes_selected() {
    let mut app = test_app();
    app.selected = 2;
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.list.len(), 2);
    assert_eq!(app.selected, 1);
}

#[test]
fn test_shift_d_clears_list() {
    let mut app = test_app();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT));
    assert!(app.list.is_empty());
}

#[test]
fn test_shift_a_toggles_all() {
    let mut app = test_app();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
    assert!(app.list.are_all_completed());
}

#[test]
fn test_a_opens_create_editor() {
    let mut app = test_app();
    handle_key(&mut app, key(KeyCode::Char('a')));
    assert!(app.editor.is_some());
}

#[test]
fn test_enter_opens_edit_editor_with_item() {
    let mut app = test_app();
    app.selected = 2;
    handle_key(&mut app, key(KeyCode::Enter));
    let editor = app.editor.as_ref().unwrap();
    assert_eq!(editor.title_text(), "Find Mike");
}

// ============================================================
// Editor
// ============================================================

#[test]
fn test_typed_characters_land_in_title() {
    let mut app = test_app();
    app.open_create_editor();
    for c in "Hi".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    assert_eq!(app.editor.as_ref().unwrap().title_text(), "Hi");
}

#[test]
fn test_tab_moves_focus_to_due_field() {
    let mut app = test_app();
    app.open_create_editor();
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.editor.as_ref().unwrap().field, EditorField::DueDate);

    handle_key(&mut app, key(KeyCode::Char('2')));
    assert_eq!(app.editor.as_ref().unwrap().due_text(), "2");
    assert_eq!(app.editor.as_ref().unwrap().title_text(), "");
}

#[test]
fn test_ctrl_k_cycles_color() {
    let mut app = test_app();
    app.open_create_editor();
    let before = app.editor.as_ref().unwrap().color;
    handle_key(&mut app, ctrl('k'));
    assert_ne!(app.editor.as_ref().unwrap().color, before);
}

#[test]
fn test_enter_saves_when_no_suggestions() {
    let mut app = test_app();
    app.open_create_editor();
    for c in "Call Dustin".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.editor.is_none());
    assert_eq!(app.list.len(), 4);
}

#[test]
fn test_esc_closes_editor_without_saving() {
    let mut app = test_app();
    app.open_create_editor();
    handle_key(&mut app, key(KeyCode::Char('X')));
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.editor.is_none());
    assert_eq!(app.list.len(), 3);
}

#[test]
fn test_ctrl_g_without_worker_is_harmless() {
    let mut app = test_app();
    app.open_create_editor();
    for c in "Buy Eggos".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    handle_key(&mut app, ctrl('g'));
    assert!(!app.suggestions.loading);
}

// ============================================================
// Suggestion panel interaction
// ============================================================

#[test]
fn test_arrows_navigate_suggestions() {
    let mut app = app_with_suggestions();
    assert_eq!(app.suggestions.selected_index(), Some(0));
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.suggestions.selected_index(), Some(1));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.suggestions.selected_index(), Some(0));
}

#[test]
fn test_enter_applies_highlighted_suggestion() {
    let mut app = app_with_suggestions();
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Enter));

    let editor = app.editor.as_ref().unwrap();
    assert_eq!(editor.title_text(), "Eggo feast awaits");
    assert!(app.suggestions.options.is_empty());
    // Editor stays open so the user can still set due date and color
    assert_eq!(app.list.len(), 3);
}

#[test]
fn test_esc_dismisses_suggestions_before_closing_editor() {
    let mut app = app_with_suggestions();
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.editor.is_some());
    assert!(app.suggestions.options.is_empty());

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.editor.is_none());
}

#[test]
fn test_editing_title_discards_suggestions() {
    let mut app = app_with_suggestions();
    handle_key(&mut app, key(KeyCode::Char('z')));
    assert!(app.suggestions.options.is_empty());
    assert!(app.suggestions.selected_option().is_none());
}

#[test]
fn test_non_title_edits_keep_suggestions() {
    let mut app = app_with_suggestions();
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Char('2')));
    assert_eq!(app.suggestions.options.len(), 3);
}
