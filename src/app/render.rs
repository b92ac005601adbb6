//! Rendering for the list view and the editor popup

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::ai::SuggestionState;
use crate::app::editor::{EditorMode, EditorState};
use crate::app::state::App;
use crate::items::{Item, format_due, format_duration};
use crate::widgets::popup::{centered_popup, clear_area, inset_rect};

const POPUP_WIDTH: u16 = 58;
const POPUP_HEIGHT: u16 = 19;

pub fn render(app: &App, frame: &mut Frame) {
    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    render_list(app, frame, list_area);
    render_footer(app, frame, footer_area);

    if let Some(ref editor) = app.editor {
        render_editor(editor, &app.suggestions, frame);
    }
}

// ============================================================
// List view
// ============================================================

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let done = app.list.items().iter().filter(|item| item.completed).count();
    let title = format!(" todui ({}/{} done) ", done, app.list.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.list.is_empty() {
        let hint = Paragraph::new("No tasks yet. Press 'a' to add one.").dark_gray();
        frame.render_widget(hint, inner);
        return;
    }

    let now = Local::now();
    let first_visible = app
        .selected
        .saturating_sub(inner.height.saturating_sub(1) as usize);
    let lines: Vec<Line> = app
        .list
        .items()
        .iter()
        .enumerate()
        .skip(first_visible)
        .take(inner.height as usize)
        .map(|(i, item)| item_line(item, i == app.selected, inner.width as usize, &now))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn item_line<'a>(item: &'a Item, selected: bool, width: usize, now: &chrono::DateTime<Local>) -> Line<'a> {
    let marker = if selected { "> " } else { "  " };
    let checkbox = if item.completed { "[x] " } else { "[ ] " };

    let mut title_style = match item.color.color() {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    };
    if item.completed {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
    }
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let mut annotation = String::new();
    if let Some(ref due) = item.due_date {
        annotation.push_str(&format!("  {}", format_due(due, now)));
    }
    if let Some(minutes) = item.duration_minutes {
        annotation.push_str(&format!("  {}", format_duration(minutes)));
    }

    let fixed = marker.len() + checkbox.len() + annotation.len();
    let title = truncate_to_width(&item.title, width.saturating_sub(fixed));

    Line::from(vec![
        Span::raw(marker),
        Span::raw(checkbox),
        Span::styled(title, title_style),
        Span::styled(annotation, Style::default().fg(Color::DarkGray)),
    ])
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = if app.editor.is_some() {
        " Enter save/apply | Tab field | Ctrl+G be creative | Ctrl+K color | Esc close "
    } else {
        " a add | Enter edit | Space done | d delete | D delete all | A toggle all | q quit "
    };
    frame.render_widget(Paragraph::new(hints).dark_gray(), area);
}

// ============================================================
// Editor popup
// ============================================================

fn render_editor(editor: &EditorState, suggestions: &SuggestionState, frame: &mut Frame) {
    let area = centered_popup(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    clear_area(frame, area);

    let title = match editor.mode {
        EditorMode::Create => " New Task ",
        EditorMode::Edit { .. } => " Edit Task ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = inset_rect(area, 1, 1);
    let [title_area, due_area, duration_area, color_area, status_area, panel_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

    frame.render_widget(&editor.title, title_area);
    frame.render_widget(&editor.due, due_area);
    frame.render_widget(&editor.duration, duration_area);

    let color_line = Line::from(vec![
        Span::raw(" Color: "),
        Span::styled(
            editor.color.label(),
            Style::default().fg(editor.color.color().unwrap_or(Color::White)),
        ),
    ]);
    frame.render_widget(Paragraph::new(color_line), color_area);

    if let Some(ref message) = editor.validation {
        frame.render_widget(Paragraph::new(format!(" {}", message)).red(), status_area);
    }

    render_suggestion_panel(suggestions, frame, panel_area);
}

/// Suggestion panel inside the editor popup
///
/// Shows one of: loading text, an error, the empty-result note, or the
/// numbered options with the highlight on the selected one.
fn render_suggestion_panel(suggestions: &SuggestionState, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if suggestions.loading {
        lines.push(Line::from(" Generating inspiring options...").dark_gray());
    } else if let Some(ref error) = suggestions.error {
        lines.push(Line::from(format!(" Failed to generate suggestions: {}", error)).red());
    } else if suggestions.empty_result {
        lines.push(Line::from(" No suggestions this time, try again").dark_gray());
    } else if !suggestions.options.is_empty() {
        lines.push(Line::from(" Pick an inspiring version (Enter to apply):").cyan());
        for (i, option) in suggestions.options.iter().enumerate() {
            let highlighted = suggestions.selected_index() == Some(i);
            let style = if highlighted {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(" {}. {} ", i + 1, option),
                style,
            )));
        }
    } else if !suggestions.enabled {
        lines.push(Line::from(" AI suggestions are disabled").dark_gray());
    } else if !suggestions.configured {
        lines.push(Line::from(" Set api_key in config.toml for suggestions").dark_gray());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Truncate to a display width, appending an ellipsis when cut short
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Leave one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
