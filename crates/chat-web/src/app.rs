//! Main App Component

use chat_core::WidgetConfig;
use leptos::prelude::*;

use crate::widget::ChatWidget;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <header class="chat-header">
                <h1>"Product Support"</h1>
                <p class="tagline">"Ask about our products, returns or anything else."</p>
            </header>
            <ChatWidget config=WidgetConfig::default() />
        </main>
    }
}
