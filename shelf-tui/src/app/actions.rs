//! Actions for the reducer pattern
//!
//! All UI state transitions are triggered by actions. Actions that the
//! controller must hear about end up as events in the state's outbox.

use crossterm::event::KeyEvent;
use libshelf::Card;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Card list ===
    /// Replace the displayed cards with a fresh rendering of the library
    Render(Vec<Card>),

    /// Move the selection cursor down
    SelectNext,

    /// Move the selection cursor up
    SelectPrevious,

    /// Activate the toggle-read control of the selected card
    ToggleSelected,

    /// Activate the remove control of the selected card
    RemoveSelected,

    /// Ask for the library to be sorted by title
    SortByTitle,

    // === Add-book form ===
    /// Reset the form and show it
    OpenForm,

    /// Hide the form without submitting
    CloseForm,

    /// Move focus to the next form field
    FormFocusNext,

    /// Move focus to the previous form field
    FormFocusPrevious,

    /// Text of the focused field changed
    FormFieldChanged(String),

    /// Flip the read checkbox
    FormToggleRead,

    /// Submit the form as it is
    FormSubmit,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}
