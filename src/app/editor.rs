//! Task editor popup state
//!
//! One editor instance exists while the popup is open, either creating a
//! new task or editing an existing one. Due date and duration are edited
//! as plain text and validated on save.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use crate::items::{Item, TextColor, format_duration};

/// Whether the editor is creating a new task or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { index: usize },
}

/// Which editor field receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    DueDate,
    Duration,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::DueDate,
            EditorField::DueDate => EditorField::Duration,
            EditorField::Duration => EditorField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            EditorField::Title => EditorField::Duration,
            EditorField::DueDate => EditorField::Title,
            EditorField::Duration => EditorField::DueDate,
        }
    }
}

/// Editor popup state
pub struct EditorState {
    pub mode: EditorMode,
    pub title: TextArea<'static>,
    pub due: TextArea<'static>,
    pub duration: TextArea<'static>,
    pub color: TextColor,
    pub field: EditorField,
    /// Save-time validation message, shown until the next keypress
    pub validation: Option<String>,
}

impl EditorState {
    pub fn for_create() -> Self {
        let mut editor = EditorState {
            mode: EditorMode::Create,
            title: make_field("", " Task "),
            due: make_field("", " Due (YYYY-MM-DD HH:MM) "),
            duration: make_field("", " Duration (1h 30m) "),
            color: TextColor::Default,
            field: EditorField::Title,
            validation: None,
        };
        editor.refresh_focus();
        editor
    }

    pub fn for_edit(index: usize, item: &Item) -> Self {
        let due_text = item
            .due_date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let duration_text = item.duration_minutes.map(format_duration).unwrap_or_default();

        let mut editor = EditorState {
            mode: EditorMode::Edit { index },
            title: make_field(&item.title, " Task "),
            due: make_field(&due_text, " Due (YYYY-MM-DD HH:MM) "),
            duration: make_field(&duration_text, " Duration (1h 30m) "),
            color: item.color,
            field: EditorField::Title,
            validation: None,
        };
        editor.refresh_focus();
        editor
    }

    pub fn title_text(&self) -> &str {
        self.title.lines()[0].as_ref()
    }

    pub fn due_text(&self) -> &str {
        self.due.lines()[0].as_ref()
    }

    pub fn duration_text(&self) -> &str {
        self.duration.lines()[0].as_ref()
    }

    /// Replace the title content (applying a suggestion)
    pub fn set_title(&mut self, text: &str) {
        self.title = make_field(text, " Task ");
        self.refresh_focus();
    }

    pub fn cycle_color(&mut self) {
        self.color = self.color.cycle();
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
        self.refresh_focus();
    }

    pub fn focus_previous(&mut self) {
        self.field = self.field.previous();
        self.refresh_focus();
    }

    pub fn active_field_mut(&mut self) -> &mut TextArea<'static> {
        match self.field {
            EditorField::Title => &mut self.title,
            EditorField::DueDate => &mut self.due,
            EditorField::Duration => &mut self.duration,
        }
    }

    /// Update field borders so only the focused field is highlighted
    fn refresh_focus(&mut self) {
        let focused = self.field;
        for (field, textarea, title) in [
            (EditorField::Title, &mut self.title, " Task "),
            (EditorField::DueDate, &mut self.due, " Due (YYYY-MM-DD HH:MM) "),
            (EditorField::Duration, &mut self.duration, " Duration (1h 30m) "),
        ] {
            let border_color = if field == focused {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border_color)),
            );
        }
    }
}

/// Single-line input field with the cursor parked at the end
fn make_field(initial: &str, title: &'static str) -> TextArea<'static> {
    let mut textarea = TextArea::from([initial.to_string()]);
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}
