//! Top-level application state

use std::path::PathBuf;

use crate::ai::{OpenAiClient, SuggestionState};
use crate::app::editor::{EditorMode, EditorState};
use crate::config::Config;
use crate::items::{Item, TodoList, parse_due, parse_duration, save_items};

/// The whole application: the list, the optional editor popup, and the
/// suggestion panel state
pub struct App {
    pub list: TodoList,
    /// Where the list is persisted (None disables persistence, for tests)
    pub storage_path: Option<PathBuf>,
    /// Index of the highlighted list row
    pub selected: usize,
    /// Open editor popup, if any
    pub editor: Option<EditorState>,
    pub suggestions: SuggestionState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, items: Vec<Item>, storage_path: Option<PathBuf>) -> Self {
        let configured = OpenAiClient::from_config(&config.ai).is_ok();
        App {
            list: TodoList::new(items),
            storage_path,
            selected: 0,
            editor: None,
            suggestions: SuggestionState::new(config.ai.enabled, configured),
            should_quit: false,
        }
    }

    // ============================================================
    // List navigation
    // ============================================================

    pub fn select_next(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.list.len();
    }

    pub fn select_previous(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.list.len() - 1);
    }

    /// Keep the highlight inside the list after removals
    pub fn clamp_selection(&mut self) {
        if self.list.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.list.len() {
            self.selected = self.list.len() - 1;
        }
    }

    // ============================================================
    // Persistence
    // ============================================================

    /// Write the list to disk after a mutation
    ///
    /// Failures are logged and otherwise ignored; a full disk should not
    /// take down the UI.
    pub fn persist(&self) {
        if let Some(ref path) = self.storage_path
            && let Err(err) = save_items(path, self.list.items())
        {
            log::error!("Failed to save items to {}: {}", path.display(), err);
        }
    }

    // ============================================================
    // Editor lifecycle
    // ============================================================

    pub fn open_create_editor(&mut self) {
        self.editor = Some(EditorState::for_create());
    }

    pub fn open_edit_editor(&mut self) {
        if let Some(item) = self.list.get(self.selected) {
            self.editor = Some(EditorState::for_edit(self.selected, item));
        }
    }

    /// Close the editor, dropping any in-flight or displayed suggestions
    pub fn close_editor(&mut self) {
        self.suggestions.cancel_in_flight_request();
        self.suggestions.clear();
        self.editor = None;
    }

    /// Validate the editor fields and apply them to the list
    ///
    /// On validation failure the editor stays open with a message set.
    pub fn save_editor(&mut self) {
        let Some(ref mut editor) = self.editor else {
            return;
        };

        let title = editor.title_text().trim().to_string();
        if title.is_empty() {
            editor.validation = Some("Title cannot be empty".to_string());
            return;
        }

        let due_text = editor.due_text().trim().to_string();
        let due_date = if due_text.is_empty() {
            None
        } else {
            match parse_due(&due_text) {
                Some(due) => Some(due),
                None => {
                    editor.validation =
                        Some("Due date must look like 2026-09-12 14:00".to_string());
                    return;
                }
            }
        };

        let duration_text = editor.duration_text().trim().to_string();
        let duration_minutes = if duration_text.is_empty() {
            None
        } else {
            match parse_duration(&duration_text) {
                Some(minutes) => Some(minutes),
                None => {
                    editor.validation = Some("Duration must look like 1h 30m".to_string());
                    return;
                }
            }
        };

        let color = editor.color;
        match editor.mode {
            EditorMode::Create => {
                let mut item = Item::new(&title);
                item.color = color;
                item.due_date = due_date;
                item.duration_minutes = duration_minutes;
                self.list.add(item);
                self.selected = self.list.len() - 1;
            }
            EditorMode::Edit { index } => {
                self.list.update(index, title, color, due_date, duration_minutes);
            }
        }

        self.persist();
        self.close_editor();
    }

    // ============================================================
    // AI responses
    // ============================================================

    /// Drain the worker response channel into the suggestion state
    ///
    /// Called once per event-loop tick so suggestion results appear without
    /// waiting for a keypress.
    pub fn poll_ai_responses(&mut self) {
        let Some(ref rx) = self.suggestions.response_rx else {
            return;
        };

        // Collect first; handle_response needs &mut self.suggestions
        let responses: Vec<_> = rx.try_iter().collect();
        for response in responses {
            self.suggestions.handle_response(response);
        }
    }
}
