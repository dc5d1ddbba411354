//! In-memory book collection

use feruca::Collator;
use serde::Serialize;

use crate::book::Book;

/// Ordered collection of books for one session.
///
/// Every contained book has a distinct identifier. All lookups are linear
/// scans; the collection is expected to stay small.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library pre-seeded with `books`.
    ///
    /// Books whose identifier repeats an earlier one are dropped.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut library = Self::new();
        for book in books {
            library.add(book);
        }
        library
    }

    /// Append a book to the end of the collection.
    ///
    /// Returns `false` without modifying the library if a book with the
    /// same identifier is already present.
    pub fn add(&mut self, book: Book) -> bool {
        if self.index_of(book.id()).is_some() {
            tracing::debug!(id = %book.id(), "Ignoring book with duplicate id");
            return false;
        }
        self.books.push(book);
        true
    }

    /// Remove the book with the given identifier, if present.
    ///
    /// Returns the removed book. A missing identifier is not an error.
    pub fn remove(&mut self, id: &str) -> Option<Book> {
        let index = self.index_of(id)?;
        Some(self.books.remove(index))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id() == id)
    }

    /// Sort alphabetically by title, ignoring case.
    ///
    /// Titles are compared with the Unicode Collation Algorithm (CLDR root
    /// order), so accented letters sort next to their base letter rather
    /// than after `z`. Titles that collate equal keep their relative order.
    pub fn sort_by_title(&mut self) {
        let mut collator = Collator::default();
        let mut keyed: Vec<(String, Book)> = self
            .books
            .drain(..)
            .map(|book| (book.title.to_uppercase(), book))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| collator.collate(a.as_str(), b.as_str()));
        self.books = keyed.into_iter().map(|(_, book)| book).collect();
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }
}
