//! UI rendering
//!
//! Draws the state produced by the reducer; nothing here changes state.

pub mod form;

pub use form::FieldEditor;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use libshelf::Card;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, editor: &FieldEditor) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Cards
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_cards(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    if state.form.open {
        form::render_form(frame, area, state, editor);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Foreground color, or the plain style when colors are off
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = match state.cards.len() {
        1 => "1 book".to_string(),
        n => format!("{} books", n),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(count, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(
            "a: add book | s: sort by title | F1: help | q: quit",
            fg(state, Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .title(" Shelf ")
            .borders(Borders::ALL)
            .border_style(fg(state, Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn card_height(card: &Card) -> u16 {
    // fields + controls line + top and bottom border
    card.fields.len() as u16 + 3
}

/// First card to draw so that the selected card is on screen
fn scroll_start(cards: &[Card], selected: usize, height: u16) -> usize {
    let Some(card) = cards.get(selected) else {
        return 0;
    };

    let mut start = selected;
    let mut used = card_height(card);
    while start > 0 {
        let above = card_height(&cards[start - 1]);
        if used + above > height {
            break;
        }
        used += above;
        start -= 1;
    }
    start
}

fn render_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.cards.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No books yet. Press 'a' to add one.",
                fg(state, Color::Yellow),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let start = scroll_start(&state.cards, state.selected, area.height);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for (index, card) in state.cards.iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let height = card_height(card).min(bottom - y);
        let rect = Rect::new(area.x, y, area.width, height);
        render_card(frame, rect, state, index, card);
        y += height;
    }
}

fn render_card(frame: &mut Frame, area: Rect, state: &AppState, index: usize, card: &Card) {
    let selected = index == state.selected;

    let mut lines: Vec<Line> = card
        .fields
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(field.value.clone()),
            ])
        })
        .collect();

    let control_style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("[ {} ]", card.toggle_label()), control_style),
        Span::raw("  "),
        Span::styled(format!("[ {} ]", card.remove_label()), control_style),
    ]));

    let border = if selected {
        fg(state, Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", index + 1))
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(widget, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.status.message {
        Some(ref message) => Line::from(Span::styled(message.clone(), fg(state, Color::Green))),
        None if state.cards.is_empty() => Line::from(Span::styled(
            "a: add book | q: quit",
            fg(state, Color::Gray),
        )),
        None => Line::from(Span::styled(
            "↑/↓: select | Enter: toggle read | d: remove | s: sort",
            fg(state, Color::Gray),
        )),
    };

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(50, 20, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Books:"),
        Line::from("  ↑/k ↓/j  - Select book"),
        Line::from("  Enter/t  - Mark as read / unread"),
        Line::from("  d/Del    - Remove book"),
        Line::from("  s        - Sort by title"),
        Line::from("  a        - Add a book"),
        Line::from(""),
        Line::from("Add book dialog:"),
        Line::from("  Tab      - Next field"),
        Line::from("  Space    - Toggle read (on Read)"),
        Line::from("  Enter    - Add book"),
        Line::from("  Esc      - Close"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Rectangle of at most `width` x `height` centered in `r`
pub(crate) fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use libshelf::Book;

    fn card(fields: usize) -> Card {
        let book = match fields {
            1 => Book::default(),
            _ => Book::new("Dune", "Herbert", "412", "Sci-Fi", false),
        };
        Card::from_book(&book)
    }

    #[test]
    fn test_card_height() {
        assert_eq!(card_height(&card(1)), 4);
        assert_eq!(card_height(&card(5)), 8);
    }

    #[test]
    fn test_scroll_start_keeps_selected_visible() {
        let cards: Vec<Card> = (0..5).map(|_| card(5)).collect();

        assert_eq!(scroll_start(&cards, 0, 20), 0);
        assert_eq!(scroll_start(&cards, 1, 20), 0);
        assert_eq!(scroll_start(&cards, 4, 20), 3);
        assert_eq!(scroll_start(&[], 0, 20), 0);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let outer = Rect::new(0, 0, 40, 10);
        let inner = centered_rect(60, 19, outer);
        assert_eq!(inner, outer);

        let inner = centered_rect(20, 4, outer);
        assert_eq!(inner, Rect::new(10, 3, 20, 4));
    }
}
