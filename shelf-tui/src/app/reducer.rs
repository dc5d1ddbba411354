//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State` with no I/O. Requests meant for the
//! controller are appended to `AppState::outbox`; the viewer drains it
//! after every reduction.

use super::actions::Action;
use super::state::{AppState, FormState, StatusBarState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libshelf::{CardAction, ViewEvent};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Card list ===
        Action::Render(cards) => {
            let selected = state.selected.min(cards.len().saturating_sub(1));
            AppState {
                cards,
                selected,
                ..state
            }
        }

        Action::SelectNext => {
            let last = state.cards.len().saturating_sub(1);
            AppState {
                selected: (state.selected + 1).min(last),
                ..state
            }
        }

        Action::SelectPrevious => AppState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        Action::ToggleSelected => card_action(state, CardAction::Toggle),

        Action::RemoveSelected => card_action(state, CardAction::Remove),

        Action::SortByTitle => {
            let mut outbox = state.outbox;
            outbox.push(ViewEvent::SortRequested);
            AppState {
                outbox,
                status: status("Sorted by title"),
                ..state
            }
        }

        // === Add-book form ===
        Action::OpenForm => AppState {
            form: FormState::opened(),
            help_visible: false,
            ..state
        },

        Action::CloseForm => AppState {
            form: FormState {
                open: false,
                ..state.form
            },
            ..state
        },

        Action::FormFocusNext => AppState {
            form: FormState {
                focus: state.form.focus.next(),
                ..state.form
            },
            ..state
        },

        Action::FormFocusPrevious => AppState {
            form: FormState {
                focus: state.form.focus.previous(),
                ..state.form
            },
            ..state
        },

        Action::FormFieldChanged(content) => {
            let mut form = state.form;
            form.set_focused_text(content);
            AppState { form, ..state }
        }

        Action::FormToggleRead => AppState {
            form: FormState {
                read: !state.form.read,
                ..state.form
            },
            ..state
        },

        Action::FormSubmit => {
            if !state.form.open {
                return state;
            }
            let submitted = state.form.to_book_form();
            let message = if submitted.title.is_empty() {
                "Added untitled book".to_string()
            } else {
                format!("Added \"{}\"", submitted.title)
            };

            let mut outbox = state.outbox;
            outbox.push(ViewEvent::FormSubmitted(submitted));
            AppState {
                outbox,
                form: FormState::default(),
                status: status(message),
                ..state
            }
        }

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: status(message),
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn status(message: impl Into<String>) -> StatusBarState {
    StatusBarState {
        message: Some(message.into()),
    }
}

fn card_action(state: AppState, action: CardAction) -> AppState {
    let Some(card) = state.selected_card() else {
        return state;
    };
    let book_id = card.book_id.clone();
    let message = match (action, card.field("title")) {
        (CardAction::Toggle, _) if card.read => "Marked as unread".to_string(),
        (CardAction::Toggle, _) => "Marked as read".to_string(),
        (CardAction::Remove, Some(title)) => format!("Removed \"{}\"", title),
        (CardAction::Remove, None) => "Removed untitled book".to_string(),
    };

    let mut outbox = state.outbox;
    outbox.push(ViewEvent::CardAction { action, book_id });
    AppState {
        outbox,
        status: status(message),
        ..state
    }
}

/// Keys the form handles itself rather than passing to the text editor
pub fn is_form_control_key(key: &KeyEvent) -> bool {
    is_interrupt(key)
        || matches!(
            key.code,
            KeyCode::Esc
                | KeyCode::Tab
                | KeyCode::BackTab
                | KeyCode::Enter
                | KeyCode::Up
                | KeyCode::Down
                | KeyCode::F(_)
        )
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    if state.form.open {
        return handle_form_key(state, key);
    }

    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return reduce(state, Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return reduce(state, Action::Quit),

        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.help_visible => return reduce(state, Action::HideHelp),
        (KeyCode::Esc, _) => return reduce(state, Action::ClearStatus),

        _ => {}
    }

    // Card list keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            reduce(state, Action::SelectNext)
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            reduce(state, Action::SelectPrevious)
        }
        (KeyCode::Enter, _) | (KeyCode::Char('t'), KeyModifiers::NONE) => {
            reduce(state, Action::ToggleSelected)
        }
        (KeyCode::Delete, _) | (KeyCode::Char('d'), KeyModifiers::NONE) => {
            reduce(state, Action::RemoveSelected)
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => reduce(state, Action::SortByTitle),
        (KeyCode::Char('a'), KeyModifiers::NONE) => reduce(state, Action::OpenForm),
        _ => state,
    }
}

/// Handle keys while the add-book dialog is open
///
/// Text entry is not handled here; the event loop feeds printable keys to
/// the field editor and reports the result as `FormFieldChanged`.
fn handle_form_key(state: AppState, key: KeyEvent) -> AppState {
    if is_interrupt(&key) {
        return reduce(state, Action::Quit);
    }

    match key.code {
        KeyCode::Esc => reduce(state, Action::CloseForm),
        KeyCode::Tab | KeyCode::Down => reduce(state, Action::FormFocusNext),
        KeyCode::BackTab | KeyCode::Up => reduce(state, Action::FormFocusPrevious),
        KeyCode::Enter => reduce(state, Action::FormSubmit),
        KeyCode::Char(' ') if !state.form.focus.is_text() => reduce(state, Action::FormToggleRead),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libshelf::{Book, Card};

    fn with_cards(n: usize) -> AppState {
        let cards = (0..n)
            .map(|i| Card::from_book(&Book::new(format!("Book {}", i), "", "", "", false)))
            .collect();
        reduce(AppState::new(), Action::Render(cards))
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_reducer_does_not_mutate_input() {
        let state = AppState::new();
        let new_state = reduce(state.clone(), Action::SetStatus("Test".to_string()));

        assert!(state.status.message.is_none());
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_render_clamps_selection() {
        let mut state = with_cards(3);
        state.selected = 2;

        let state = reduce(state, Action::Render(Vec::new()));
        assert_eq!(state.selected, 0);
        assert!(state.cards.is_empty());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = with_cards(2);
        state = reduce(state, Action::SelectPrevious);
        assert_eq!(state.selected, 0);

        state = reduce(state, Action::SelectNext);
        state = reduce(state, Action::SelectNext);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_toggle_selected_queues_event() {
        let state = with_cards(2);
        let id = state.cards[0].book_id.clone();

        let state = reduce(state, Action::ToggleSelected);

        assert_eq!(
            state.outbox,
            vec![ViewEvent::CardAction {
                action: CardAction::Toggle,
                book_id: id,
            }]
        );
        assert_eq!(state.status.message.as_deref(), Some("Marked as read"));
    }

    #[test]
    fn test_card_action_without_cards_is_noop() {
        let state = reduce(AppState::new(), Action::RemoveSelected);
        assert!(state.outbox.is_empty());
    }

    #[test]
    fn test_submit_closed_form_is_noop() {
        let state = reduce(AppState::new(), Action::FormSubmit);
        assert!(state.outbox.is_empty());
    }

    #[test]
    fn test_open_form_resets_previous_input() {
        let mut state = reduce(AppState::new(), Action::OpenForm);
        state = reduce(state, Action::FormFieldChanged("Half typed".to_string()));
        state = reduce(state, Action::CloseForm);
        assert_eq!(state.form.title, "Half typed");

        state = reduce(state, Action::OpenForm);
        assert!(state.form.open);
        assert_eq!(state.form.title, "");
    }
}
