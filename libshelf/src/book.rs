//! The book record

use serde::Serialize;
use uuid::Uuid;

/// A single library entry.
///
/// The identifier is generated once in [`Book::new`] and can only be read
/// afterwards. All other fields are free-form text with no validation; the
/// read flag changes only through [`Book::toggle_read`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: String,
    pub title: String,
    pub author: String,
    pub page_count: String,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            page_count: page_count.into(),
            genre: genre.into(),
            read,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    /// The fields shown for this book, in display order.
    ///
    /// Text fields are returned as-is (possibly empty); `read` is rendered
    /// as `Yes`/`No`. Callers decide what to do with empty values.
    pub fn display_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("title", self.title.as_str()),
            ("author", self.author.as_str()),
            ("page count", self.page_count.as_str()),
            ("genre", self.genre.as_str()),
            ("read", if self.read { "Yes" } else { "No" }),
        ]
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new("", "", "", "", false)
    }
}
