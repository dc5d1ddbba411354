//! View contract
//!
//! A viewer renders a [`Library`] and reports user interactions as
//! [`ViewEvent`]s over an [`EventBus`]. The controller holds the receiving
//! end of the bus and calls [`LibraryView::display_all`] after every
//! mutation.
//!
//! Nothing here knows about terminals: [`Card`] is the rendering-agnostic
//! description of what each book looks like on screen.

pub mod events;

pub use events::{BookForm, CardAction, EventBus, EventReceiver, ViewEvent};

use crate::book::Book;
use crate::library::Library;

/// Label of the control that removes a book.
pub const REMOVE_LABEL: &str = "Remove Book";

/// Something that can show the library.
pub trait LibraryView {
    /// Rebuild the whole representation from `library`.
    fn display_all(&mut self, library: &Library);
}

/// One labelled value on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

/// Visual representation of one book with its action controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub book_id: String,
    pub fields: Vec<CardField>,
    pub read: bool,
}

impl Card {
    /// Build a card showing every non-empty field of `book`.
    ///
    /// The read flag is always present as `Yes`/`No`.
    pub fn from_book(book: &Book) -> Self {
        let fields = book
            .display_fields()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| CardField {
                label,
                value: value.to_string(),
            })
            .collect();

        Self {
            book_id: book.id().to_string(),
            fields,
            read: book.read,
        }
    }

    /// Cards for every book in library order
    pub fn from_library(library: &Library) -> Vec<Self> {
        library.books().iter().map(Self::from_book).collect()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.read {
            "Mark as unread"
        } else {
            "Mark as read"
        }
    }

    pub fn remove_label(&self) -> &'static str {
        REMOVE_LABEL
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}
