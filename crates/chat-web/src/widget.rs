//! Chat Widget
//!
//! Owns the page elements of the widget and hands them to the dispatcher as
//! a [`SignalView`]. Each form submit spawns one independent dispatch.

use std::rc::Rc;

use chat_core::{HttpQueryClient, QueryDispatcher, WidgetConfig};
use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::components::{MessageBubble, TypingIndicator};
use crate::view::SignalView;

type Dispatcher = QueryDispatcher<SignalView, HttpQueryClient>;

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".into())
}

#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    let input = RwSignal::new(String::new());
    let messages = RwSignal::new(Vec::new());
    let typing = RwSignal::new(false);
    let log_ref = NodeRef::<html::Div>::new();

    let view = Rc::new(SignalView::new(input, messages, typing, log_ref));
    let client = HttpQueryClient::for_origin(&page_origin(), &config.endpoint);
    let dispatcher: StoredValue<Rc<Dispatcher>, LocalStorage> =
        StoredValue::new_local(Rc::new(QueryDispatcher::new(view, client, &config)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let dispatcher = dispatcher.get_value();
        leptos::task::spawn_local(async move {
            let outcome = dispatcher.submit().await;
            tracing::debug!(?outcome, "submission finished");
        });
    };

    view! {
        <div class="chat-container">
            <div id="chat-history" class="chat-history" node_ref=log_ref>
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, message)| view! { <MessageBubble message=message /> }
                />
            </div>

            <TypingIndicator visible=typing />

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <input
                    id="user-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Ask a question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </div>
    }
}
