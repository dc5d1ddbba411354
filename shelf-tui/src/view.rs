//! Terminal viewer
//!
//! `TuiView` is the [`LibraryView`] the controller renders into. It keeps
//! the UI state, runs every action through the reducer, and forwards the
//! events the reducer queued onto its [`EventBus`].

use libshelf::view::EventBus;
use libshelf::{Card, Library, LibraryView};

use crate::app::{reduce, Action, AppState, UiConfig};

pub struct TuiView {
    state: AppState,
    bus: EventBus,
}

impl TuiView {
    /// Create a viewer that reports interactions on `bus`
    pub fn new(config: UiConfig, bus: EventBus) -> Self {
        Self {
            state: AppState::with_config(config),
            bus,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Put a one-line summary of the library size in the status bar
    pub fn greet(&mut self, books: usize) {
        let message = match books {
            0 => "Your shelf is empty. Press 'a' to add a book".to_string(),
            1 => "1 book on your shelf".to_string(),
            n => format!("{} books on your shelf", n),
        };
        self.dispatch(Action::SetStatus(message));
    }

    /// Reduce `action` into the state and emit any queued events
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        for event in std::mem::take(&mut self.state.outbox) {
            self.bus.emit(event);
        }
    }
}

impl LibraryView for TuiView {
    fn display_all(&mut self, library: &Library) {
        self.dispatch(Action::Render(Card::from_library(library)));
    }
}
