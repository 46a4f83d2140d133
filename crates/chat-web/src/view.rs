//! Signal-backed View
//!
//! `ChatView` over the widget's reactive state. The log container is held
//! by `NodeRef` so scrolling can reach the real element once it is mounted.

use chat_core::{ChatView, Message};
use leptos::{html, prelude::*};

#[derive(Clone, Copy)]
pub struct SignalView {
    input: RwSignal<String>,
    messages: RwSignal<Vec<Message>>,
    typing: RwSignal<bool>,
    log: NodeRef<html::Div>,
}

impl SignalView {
    pub const fn new(
        input: RwSignal<String>,
        messages: RwSignal<Vec<Message>>,
        typing: RwSignal<bool>,
        log: NodeRef<html::Div>,
    ) -> Self {
        Self {
            input,
            messages,
            typing,
            log,
        }
    }
}

impl ChatView for SignalView {
    fn input_value(&self) -> String {
        self.input.get_untracked()
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn append(&self, message: Message) {
        self.messages.update(|log| log.push(message));
    }

    fn scroll_to_bottom(&self) {
        // Unmounted: nothing to scroll
        if self.log.get_untracked().is_none() {
            return;
        }
        // New entries reach the DOM after the current tick
        let log = self.log;
        request_animation_frame(move || {
            if let Some(el) = log.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    }

    fn set_typing(&self, visible: bool) {
        self.typing.set(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> (SignalView, RwSignal<String>, RwSignal<Vec<Message>>, RwSignal<bool>) {
        let input = RwSignal::new(String::new());
        let messages = RwSignal::new(Vec::new());
        let typing = RwSignal::new(false);
        let view = SignalView::new(input, messages, typing, NodeRef::new());
        (view, input, messages, typing)
    }

    #[test]
    fn test_input_round_trip() {
        let (view, input, _, _) = view();
        input.set("What is 2+2?".into());
        assert_eq!(view.input_value(), "What is 2+2?");

        view.clear_input();
        assert_eq!(input.get_untracked(), "");
    }

    #[test]
    fn test_append_and_typing() {
        let (view, _, messages, typing) = view();
        view.append(Message::user("hi", "10:00"));
        view.append(Message::bot("hello", Some("general".into()), "10:00"));
        view.set_typing(true);

        let log = messages.get_untracked();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].category(), Some("general"));
        assert!(typing.get_untracked());

        // No mounted element yet
        view.scroll_to_bottom();
    }
}
