//! Widget Configuration

use serde::{Deserialize, Serialize};

use crate::error::FALLBACK_MESSAGE;
use crate::message::ClockFormat;
use crate::wire::QUERY_PATH;

/// Settings for one widget instance. The defaults match the `/query`
/// contract, so the browser build never needs to load anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Endpoint path, resolved against the page origin
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bot text rendered when a query fails
    #[serde(default = "default_fallback")]
    pub fallback_message: String,

    #[serde(default)]
    pub clock: ClockFormat,
}

fn default_endpoint() -> String {
    QUERY_PATH.into()
}

fn default_fallback() -> String {
    FALLBACK_MESSAGE.into()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            fallback_message: default_fallback(),
            clock: ClockFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_config_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "/query");
        assert_eq!(
            config.fallback_message,
            "Sorry, I encountered an error. Please try again later."
        );
        assert_eq!(config.clock, ClockFormat::Locale);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: WidgetConfig = serde_json::from_str(r#"{"clock": "12h"}"#).unwrap();
        assert_eq!(config.clock, ClockFormat::TwelveHour);
        assert_eq!(config.endpoint, "/query");
    }
}
