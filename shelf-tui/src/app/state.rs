//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The card list is a snapshot of the last render; the library itself
//! lives in the controller.

use libshelf::config::UiSection;
use libshelf::{BookForm, Card, Config, ViewEvent};

/// Root application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Cards from the most recent render, in library order
    pub cards: Vec<Card>,

    /// Index of the selected card
    pub selected: usize,

    /// Add-book dialog
    pub form: FormState,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,

    /// Events waiting to be emitted to the controller
    pub outbox: Vec<ViewEvent>,
}

/// Fields of the add-book dialog, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Pages,
    Genre,
    Read,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Pages,
        FormField::Genre,
        FormField::Read,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Pages => "Pages",
            FormField::Genre => "Genre",
            FormField::Read => "Read",
        }
    }

    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Read)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Add-book dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub open: bool,
    pub focus: FormField,
    pub title: String,
    pub author: String,
    pub pages: String,
    pub genre: String,
    pub read: bool,
}

impl FormState {
    /// A freshly reset, visible form
    pub fn opened() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    /// Text of a text field; `None` for the read checkbox
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Author => Some(&self.author),
            FormField::Pages => Some(&self.pages),
            FormField::Genre => Some(&self.genre),
            FormField::Read => None,
        }
    }

    pub fn focused_text(&self) -> Option<&str> {
        self.text(self.focus)
    }

    /// Whether typed characters should go to the focused field
    pub fn accepts_text(&self) -> bool {
        self.open && self.focus.is_text()
    }

    pub fn set_focused_text(&mut self, value: String) {
        match self.focus {
            FormField::Title => self.title = value,
            FormField::Author => self.author = value,
            FormField::Pages => self.pages = value,
            FormField::Genre => self.genre = value,
            FormField::Read => {}
        }
    }

    pub fn to_book_form(&self) -> BookForm {
        BookForm {
            title: self.title.clone(),
            author: self.author.clone(),
            pages: self.pages.clone(),
            genre: self.genre.clone(),
            read: self.read,
        }
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl UiConfig {
    /// Build from the `[ui]` config section.
    ///
    /// `NO_COLOR` / `SHELF_TUI_NO_COLOR` always disable colors and
    /// `SHELF_TUI_TICK_MS` overrides the configured tick rate.
    pub fn from_section(section: &UiSection) -> Self {
        let no_color_env =
            std::env::var("NO_COLOR").is_ok() || std::env::var("SHELF_TUI_NO_COLOR").is_ok();
        let colors_enabled = !no_color_env && section.colors.unwrap_or(true);

        let tick_rate_ms = std::env::var("SHELF_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .or(section.tick_rate_ms)
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_section(&config.ui)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_section(&UiSection::default())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward_and_back() {
        let mut field = FormField::Title;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);

        assert_eq!(FormField::Title.previous(), FormField::Read);
        assert_eq!(FormField::Read.next(), FormField::Title);
    }

    #[test]
    fn test_set_focused_text_ignores_read() {
        let mut form = FormState::opened();
        form.focus = FormField::Read;
        form.set_focused_text("ignored".to_string());

        assert_eq!(form, FormState {
            focus: FormField::Read,
            ..FormState::opened()
        });
        assert!(!form.accepts_text());
    }

    #[test]
    fn test_to_book_form_copies_fields() {
        let form = FormState {
            open: true,
            focus: FormField::Genre,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            pages: "412".to_string(),
            genre: "Sci-Fi".to_string(),
            read: true,
        };

        let book_form = form.to_book_form();
        assert_eq!(book_form.title, "Dune");
        assert_eq!(book_form.pages, "412");
        assert!(book_form.read);
    }
}
