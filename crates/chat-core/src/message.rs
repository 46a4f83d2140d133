//! Conversation Messages
//!
//! A message only lives as long as the log entry that displays it. Nothing
//! here is persisted or sent back to the server.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Question typed into the widget
    User,
    /// Answer (or fallback) from the backend
    Bot,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hour:minute style for the metadata line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// Whatever the browser locale uses (`14:05` or `02:05 PM`). Outside a
    /// browser there is no locale to ask, so this falls back to 24-hour.
    #[default]
    #[serde(rename = "locale")]
    Locale,
    /// `14:05`
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `02:05 PM`
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockFormat {
    pub fn format<Tz>(self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let pattern = match self {
            Self::Locale => {
                if let Some(formatted) = locale_time(at.timestamp_millis()) {
                    return formatted;
                }
                "%H:%M"
            }
            Self::TwentyFourHour => "%H:%M",
            Self::TwelveHour => "%I:%M %p",
        };
        at.format(pattern).to_string()
    }
}

/// `Intl.DateTimeFormat([], {hour: "2-digit", minute: "2-digit"})` in the
/// browser's default locale and time zone
#[cfg(target_arch = "wasm32")]
fn locale_time(epoch_millis: i64) -> Option<String> {
    use js_sys::{Array, Date, Intl, Object, Reflect};
    use wasm_bindgen::JsValue;

    let options = Object::new();
    Reflect::set(&options, &"hour".into(), &"2-digit".into()).ok()?;
    Reflect::set(&options, &"minute".into(), &"2-digit".into()).ok()?;

    #[allow(clippy::cast_precision_loss)]
    let date = Date::new(&JsValue::from_f64(epoch_millis as f64));
    Intl::DateTimeFormat::new(&Array::new(), &options)
        .format()
        .call1(&JsValue::UNDEFINED, &date)
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
const fn locale_time(_epoch_millis: i64) -> Option<String> {
    None
}

/// A single rendered log entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,

    /// Displayed verbatim, never parsed as markup
    pub text: String,

    /// Small tag shown before the timestamp
    pub category: Option<String>,

    /// Local time of rendering, already formatted
    pub timestamp: String,
}

impl Message {
    /// Create a message. An empty category is the same as no category.
    pub fn new(
        role: Role,
        text: impl Into<String>,
        category: Option<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            role,
            text: text.into(),
            category: category.filter(|c| !c.is_empty()),
            timestamp: timestamp.into(),
        }
    }

    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::new(Role::User, text, None, timestamp)
    }

    pub fn bot(
        text: impl Into<String>,
        category: Option<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self::new(Role::Bot, text, category, timestamp)
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Class list for the bubble element, e.g. `message bot`
    pub fn css_class(&self) -> String {
        format!("message {}", self.role)
    }
}
