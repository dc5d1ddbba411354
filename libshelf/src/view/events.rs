//! Events raised by a viewer
//!
//! Viewers never touch the library. They describe what the user did as a
//! [`ViewEvent`] and emit it on an [`EventBus`]; whoever subscribed (the
//! controller) decides what it means.
//!
//! # Example
//!
//! ```
//! use libshelf::view::events::{EventBus, ViewEvent};
//!
//! let mut bus = EventBus::new();
//! let receiver = bus.subscribe();
//!
//! bus.emit(ViewEvent::SortRequested);
//!
//! assert_eq!(receiver.try_recv().ok(), Some(ViewEvent::SortRequested));
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

/// Receiving end of an [`EventBus`] subscription
pub type EventReceiver = Receiver<ViewEvent>;

/// Fan-out channel from a viewer to its subscribers
///
/// Emitting with no subscribers drops the event. Subscribers whose
/// receiver was dropped are forgotten on the next emit.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<ViewEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every event emitted from now on
    pub fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, event: ViewEvent) {
        tracing::trace!(?event, "Emitting view event");
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Interactions a viewer reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The add-book form was submitted
    FormSubmitted(BookForm),

    /// A control on a card was activated
    CardAction {
        action: CardAction,
        book_id: String,
    },

    /// The user asked for the list to be sorted by title
    SortRequested,
}

/// Raw values of the add-book form
///
/// Text is passed through untouched; `pages` is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub genre: String,
    /// Whether the read checkbox was ticked
    pub read: bool,
}

/// Controls present on every card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Toggle,
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_subscriber() {
        let mut bus = EventBus::new();
        let receiver = bus.subscribe();

        bus.emit(ViewEvent::CardAction {
            action: CardAction::Toggle,
            book_id: "abc".to_string(),
        });

        match receiver.try_recv() {
            Ok(ViewEvent::CardAction { action, book_id }) => {
                assert_eq!(action, CardAction::Toggle);
                assert_eq!(book_id, "abc");
            }
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_multiple_subscribers() {
        let mut bus = EventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.emit(ViewEvent::SortRequested);

        assert_eq!(first.try_recv().ok(), Some(ViewEvent::SortRequested));
        assert_eq!(second.try_recv().ok(), Some(ViewEvent::SortRequested));
    }

    #[test]
    fn test_no_subscribers() {
        let mut bus = EventBus::new();
        bus.emit(ViewEvent::SortRequested);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut bus = EventBus::new();
        let kept = bus.subscribe();
        let dropped = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(dropped);
        bus.emit(ViewEvent::SortRequested);

        assert_eq!(bus.subscriber_count(), 1);
        assert!(kept.try_recv().is_ok());
    }

    #[test]
    fn test_events_arrive_in_order() {
        let mut bus = EventBus::new();
        let receiver = bus.subscribe();

        bus.emit(ViewEvent::SortRequested);
        bus.emit(ViewEvent::FormSubmitted(BookForm::default()));

        let received: Vec<ViewEvent> = receiver.try_iter().collect();
        assert_eq!(
            received,
            vec![
                ViewEvent::SortRequested,
                ViewEvent::FormSubmitted(BookForm::default()),
            ]
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = ViewEvent::CardAction {
            action: CardAction::Remove,
            book_id: "serial_test".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"card_action\""));
        assert!(json.contains("\"action\":\"remove\""));
        assert!(json.contains("serial_test"));

        let deserialized: ViewEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_form_event_serialization() {
        let event = ViewEvent::FormSubmitted(BookForm {
            title: "Dune".to_string(),
            read: true,
            ..BookForm::default()
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("form_submitted"));
        assert!(json.contains("\"title\":\"Dune\""));
    }
}
