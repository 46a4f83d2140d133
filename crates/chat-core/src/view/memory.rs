//! In-memory View
//!
//! Headless `ChatView` for tests and demos. Records every call in order.

use std::cell::{Cell, RefCell};

use super::ChatView;
use crate::message::{Message, Role};

/// One call made against a [`MemoryView`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    InputCleared,
    Appended(Role),
    Scrolled,
    Typing(bool),
}

/// Headless view backed by cells
#[derive(Debug, Default)]
pub struct MemoryView {
    input: RefCell<String>,
    messages: RefCell<Vec<Message>>,
    typing: Cell<bool>,
    /// Number of entries that were in the log at the last scroll
    scrolled_to: Cell<usize>,
    events: RefCell<Vec<ViewEvent>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into the input
    pub fn type_input(&self, text: impl Into<String>) {
        *self.input.borrow_mut() = text.into();
    }

    pub fn input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.get()
    }

    /// True when the newest entry was in view at the last scroll
    pub fn is_scrolled_to_bottom(&self) -> bool {
        self.scrolled_to.get() == self.len()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ChatView for MemoryView {
    fn input_value(&self) -> String {
        self.input()
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
        self.record(ViewEvent::InputCleared);
    }

    fn append(&self, message: Message) {
        let role = message.role;
        self.messages.borrow_mut().push(message);
        self.record(ViewEvent::Appended(role));
    }

    fn scroll_to_bottom(&self) {
        self.scrolled_to.set(self.len());
        self.record(ViewEvent::Scrolled);
    }

    fn set_typing(&self, visible: bool) {
        self.typing.set(visible);
        self.record(ViewEvent::Typing(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_tracks_newest_entry() {
        let view = MemoryView::new();
        view.append(Message::user("one", "10:00"));
        assert!(!view.is_scrolled_to_bottom());

        view.scroll_to_bottom();
        assert!(view.is_scrolled_to_bottom());

        view.append(Message::user("two", "10:01"));
        assert!(!view.is_scrolled_to_bottom());
    }

    #[test]
    fn test_events_are_recorded_in_order() {
        let view = MemoryView::new();
        view.type_input("hello");
        view.clear_input();
        view.set_typing(true);

        assert_eq!(view.input(), "");
        assert_eq!(
            view.events(),
            vec![ViewEvent::InputCleared, ViewEvent::Typing(true)]
        );
    }
}
