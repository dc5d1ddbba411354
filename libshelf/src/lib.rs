//! Shelf - a personal book-library tracker
//!
//! This library holds everything that does not depend on a terminal:
//! the book model, the in-memory library, the contract a viewer must
//! fulfil, and the controller that wires viewer events to library
//! mutations.

pub mod book;
pub mod config;
pub mod controller;
pub mod error;
pub mod library;
pub mod logging;
pub mod view;

// Re-export commonly used types
pub use book::Book;
pub use config::Config;
pub use controller::LibraryController;
pub use error::{Result, ShelfError};
pub use library::Library;
pub use view::{BookForm, Card, CardAction, LibraryView, ViewEvent};
