//! kb-chat Web Widget
//!
//! Leptos-based WASM front end: a question form, a scrolling conversation
//! log and a typing indicator, wired to `POST /query`.

mod app;
mod components;
mod view;
mod widget;

pub use app::App;
pub use view::SignalView;
pub use widget::ChatWidget;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Dispatcher diagnostics go to the browser console
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
