//! `/query` wire format, shared by the widget and the server

use serde::{Deserialize, Serialize};

/// Path the widget posts questions to
pub const QUERY_PATH: &str = "/query";

/// Body of `POST /query`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Successful `/query` response.
///
/// Only `answer` is required. The server also echoes the question and always
/// sends a category, but other backends may omit both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub answer: String,
}
