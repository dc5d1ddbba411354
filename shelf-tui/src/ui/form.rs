//! Add-book dialog
//!
//! The focused text field is edited through a single-line tui-textarea;
//! other fields are drawn from `FormState` directly.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

use super::{centered_rect, fg};
use crate::app::{is_form_control_key, AppState, FormField, FormState};

/// Line editor bound to whichever text field has focus
pub struct FieldEditor<'a> {
    textarea: TextArea<'a>,
    field: Option<FormField>,
}

impl<'a> FieldEditor<'a> {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            field: None,
        }
    }

    /// Rebuild the editor when focus moved or the form was reset
    pub fn sync(&mut self, form: &FormState, colors_enabled: bool) {
        let wanted = if form.accepts_text() {
            Some(form.focus)
        } else {
            None
        };
        let text = form.focused_text().unwrap_or("");

        if wanted == self.field && self.content() == text {
            return;
        }

        let mut textarea = TextArea::new(vec![text.to_string()]);
        textarea.move_cursor(CursorMove::End);
        textarea.set_cursor_line_style(Style::default());
        if let Some(field) = wanted {
            let border = if colors_enabled {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            textarea.set_block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        }

        self.textarea = textarea;
        self.field = wanted;
    }

    /// Feed a key to the editor
    ///
    /// Returns the new content if the key changed it. Form control keys
    /// are never consumed.
    pub fn input(&mut self, key: KeyEvent) -> Option<String> {
        if is_form_control_key(&key) || self.field.is_none() {
            return None;
        }
        if self.textarea.input(key) {
            Some(self.content())
        } else {
            None
        }
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn field(&self) -> Option<FormField> {
        self.field
    }
}

impl Default for FieldEditor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the dialog over `area`
pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState, editor: &FieldEditor) {
    let popup = centered_rect(60, 19, area);
    let block = Block::default()
        .title(" Add Book ")
        .borders(Borders::ALL)
        .border_style(fg(state, Color::Cyan));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let form = &state.form;
    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = *field == form.focus;

        if focused && editor.field() == Some(*field) {
            frame.render_widget(&editor.textarea, *row);
            continue;
        }

        let border = if focused {
            fg(state, Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border);

        let content = match form.text(*field) {
            Some(text) => Line::from(text.to_string()),
            None => {
                let mark = if form.read { "[x]" } else { "[ ]" };
                Line::from(vec![
                    Span::raw(format!("{} Already read", mark)),
                    Span::styled("  (Space to toggle)", fg(state, Color::Gray)),
                ])
            }
        };
        frame.render_widget(Paragraph::new(content).block(block), *row);
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab: next field | Enter: add book | Esc: close",
        fg(state, Color::Gray),
    )));
    frame.render_widget(hints, rows[5]);
}
