//! Message Renderer
//!
//! Turns `(role, text, category)` into a log entry stamped with the local
//! time, appends it and scrolls it into view.

use std::fmt::Display;
use std::rc::Rc;

use chrono::{DateTime, Local, TimeZone};

use crate::message::{ClockFormat, Message, Role};
use crate::view::ChatView;

/// Stateless append-and-scroll over an injected view
pub struct MessageRenderer<V: ?Sized> {
    view: Rc<V>,
    clock: ClockFormat,
}

impl<V: ?Sized> Clone for MessageRenderer<V> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            clock: self.clock,
        }
    }
}

impl<V: ChatView + ?Sized> MessageRenderer<V> {
    pub fn new(view: Rc<V>, clock: ClockFormat) -> Self {
        Self { view, clock }
    }

    /// Append a message stamped with the current local time
    pub fn render(&self, role: Role, text: impl Into<String>, category: Option<&str>) {
        self.render_at(role, text, category, &Local::now());
    }

    /// Append a message stamped with `at`
    pub fn render_at<Tz>(
        &self,
        role: Role,
        text: impl Into<String>,
        category: Option<&str>,
        at: &DateTime<Tz>,
    ) where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let message = Message::new(
            role,
            text,
            category.map(str::to_owned),
            self.clock.format(at),
        );
        self.view.append(message);
        self.view.scroll_to_bottom();
    }
}
