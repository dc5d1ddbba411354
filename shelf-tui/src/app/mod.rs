//! Application module
//!
//! - Actions: what can happen
//! - State: what the screen shows right now
//! - Reducer: pure function (State, Action) -> State
//! - Event: terminal input polling

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::{is_form_control_key, reduce};
pub use state::{AppState, FormField, FormState, StatusBarState, UiConfig};
