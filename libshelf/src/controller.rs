//! Controller wiring view events to library mutations
//!
//! The controller has a single state: ready. Each [`ViewEvent`] is applied
//! to the library synchronously and followed by a full re-render, so the
//! view never observes a half-applied change.

use crate::book::Book;
use crate::library::Library;
use crate::view::{BookForm, CardAction, EventReceiver, LibraryView, ViewEvent};

/// Owns the library and the view, and reacts to the view's events.
pub struct LibraryController<V: LibraryView> {
    library: Library,
    view: V,
    events: EventReceiver,
}

impl<V: LibraryView> LibraryController<V> {
    /// Start a controller with the demonstration books added to `library`.
    pub fn new(library: Library, view: V, events: EventReceiver) -> Self {
        Self::with_seed(library, view, events, demo_books())
    }

    /// Start a controller, adding `seed` to `library` and rendering once.
    pub fn with_seed(
        mut library: Library,
        view: V,
        events: EventReceiver,
        seed: impl IntoIterator<Item = Book>,
    ) -> Self {
        for book in seed {
            library.add(book);
        }

        match serde_json::to_string(&library) {
            Ok(json) => tracing::debug!(library = %json, "Library ready"),
            Err(e) => tracing::warn!(error = %e, "Could not serialize library"),
        }

        let mut controller = Self {
            library,
            view,
            events,
        };
        controller.render();
        controller
    }

    /// Apply a single event and re-render.
    pub fn handle(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::FormSubmitted(form) => {
                let book = book_from_form(form);
                tracing::debug!(id = %book.id(), title = %book.title, "Adding book");
                self.library.add(book);
            }
            ViewEvent::CardAction {
                action: CardAction::Toggle,
                book_id,
            } => match self.library.find_by_id_mut(&book_id) {
                Some(book) => {
                    book.toggle_read();
                    tracing::debug!(id = %book_id, read = book.read, "Toggled read status");
                }
                None => tracing::debug!(id = %book_id, "Toggle for unknown book ignored"),
            },
            ViewEvent::CardAction {
                action: CardAction::Remove,
                book_id,
            } => match self.library.remove(&book_id) {
                Some(book) => tracing::debug!(id = %book_id, title = %book.title, "Removed book"),
                None => tracing::debug!(id = %book_id, "Remove for unknown book ignored"),
            },
            ViewEvent::SortRequested => {
                self.library.sort_by_title();
                tracing::debug!(count = self.library.len(), "Sorted library by title");
            }
        }

        self.render();
    }

    /// Apply every event currently waiting on the bus.
    ///
    /// Returns the number of events handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn render(&mut self) {
        self.view.display_all(&self.library);
    }
}

fn book_from_form(form: BookForm) -> Book {
    Book::new(form.title, form.author, form.pages, form.genre, form.read)
}

/// Fixed entries shown on a fresh start
pub fn demo_books() -> Vec<Book> {
    vec![
        Book::new(
            "Harry Potter and the Thinking Rock",
            "Miku Hatsune",
            "18",
            "Fantasy",
            false,
        ),
        Book::new(
            "Medibations",
            "Markiplier League of Legends Aurelia",
            "",
            "",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Card, EventBus};

    #[derive(Default)]
    struct RecordingView {
        renders: usize,
        cards: Vec<Card>,
    }

    impl LibraryView for RecordingView {
        fn display_all(&mut self, library: &Library) {
            self.renders += 1;
            self.cards = Card::from_library(library);
        }
    }

    fn controller() -> (LibraryController<RecordingView>, EventBus) {
        let mut bus = EventBus::new();
        let events = bus.subscribe();
        let controller =
            LibraryController::with_seed(Library::new(), RecordingView::default(), events, Vec::new());
        (controller, bus)
    }

    #[test]
    fn test_new_seeds_demo_books_and_renders() {
        let mut bus = EventBus::new();
        let events = bus.subscribe();
        let controller = LibraryController::new(Library::new(), RecordingView::default(), events);

        assert_eq!(controller.library().len(), 2);
        assert_eq!(controller.view().renders, 1);
        assert_eq!(controller.view().cards.len(), 2);
        assert_eq!(
            controller.view().cards[0].field("title"),
            Some("Harry Potter and the Thinking Rock")
        );
        assert_eq!(controller.view().cards[1].field("read"), Some("Yes"));
    }

    #[test]
    fn test_form_submitted_adds_book() {
        let (mut controller, _bus) = controller();

        controller.handle(ViewEvent::FormSubmitted(BookForm {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            pages: "412".to_string(),
            genre: "Sci-Fi".to_string(),
            read: true,
        }));

        let book = &controller.library().books()[0];
        assert_eq!(book.title, "Dune");
        assert!(book.read);
        assert_eq!(controller.view().renders, 2);
        assert_eq!(controller.view().cards[0].toggle_label(), "Mark as unread");
    }

    #[test]
    fn test_toggle_unknown_id_still_renders() {
        let (mut controller, _bus) = controller();

        controller.handle(ViewEvent::CardAction {
            action: CardAction::Toggle,
            book_id: "missing".to_string(),
        });

        assert_eq!(controller.view().renders, 2);
        assert!(controller.library().is_empty());
    }

    #[test]
    fn test_pump_drains_bus() {
        let (mut controller, mut bus) = controller();

        bus.emit(ViewEvent::FormSubmitted(BookForm {
            title: "b".to_string(),
            ..BookForm::default()
        }));
        bus.emit(ViewEvent::FormSubmitted(BookForm {
            title: "A".to_string(),
            ..BookForm::default()
        }));
        bus.emit(ViewEvent::SortRequested);

        assert_eq!(controller.pump(), 3);
        assert_eq!(controller.pump(), 0);
        assert_eq!(controller.view().cards[0].field("title"), Some("A"));
    }
}
