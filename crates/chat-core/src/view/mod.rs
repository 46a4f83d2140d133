//! View Seam
//!
//! The page elements the widget touches: a text input, a scrollable log
//! container and a typing indicator. Components receive a `ChatView` at
//! construction and never look elements up themselves.

mod memory;

pub use memory::{MemoryView, ViewEvent};

use crate::message::Message;

/// Page elements driven by the renderer and dispatcher.
///
/// Methods take `&self`: the UI is single-threaded and implementations use
/// interior mutability (signals in the browser, cells in [`MemoryView`]).
pub trait ChatView {
    /// Current raw value of the question input
    fn input_value(&self) -> String;

    /// Empty the question input
    fn clear_input(&self);

    /// Append one entry to the bottom of the log
    fn append(&self, message: Message);

    /// Scroll the log so the newest entry is fully visible
    fn scroll_to_bottom(&self);

    /// Show or hide the typing indicator
    fn set_typing(&self, visible: bool);
}
