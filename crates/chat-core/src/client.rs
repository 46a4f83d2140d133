//! Query Client
//!
//! One request, one result. Transport failures, non-success statuses and
//! unparseable bodies all come back as `Err`; the caller decides what the
//! user sees.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{ChatError, Result};
use crate::wire::{QueryRequest, QueryResponse};

/// Sends a question to the answer backend.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait QueryClient {
    async fn query(&self, question: &str) -> Result<QueryResponse>;
}

#[async_trait(?Send)]
impl<T: QueryClient + ?Sized> QueryClient for Rc<T> {
    async fn query(&self, question: &str) -> Result<QueryResponse> {
        (**self).query(question).await
    }
}

/// `POST <endpoint>` with a JSON body, via reqwest
#[derive(Clone, Debug)]
pub struct HttpQueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpQueryClient {
    /// `endpoint` must be an absolute URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Join a page origin (`http://host:port`) and a path (`/query`)
    pub fn for_origin(origin: &str, path: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Self::new(format!("{origin}/{path}"))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl QueryClient for HttpQueryClient {
    async fn query(&self, question: &str) -> Result<QueryResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&QueryRequest::new(question))
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| ChatError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_origin_joins_cleanly() {
        let client = HttpQueryClient::for_origin("http://localhost:8000/", "/query");
        assert_eq!(client.endpoint(), "http://localhost:8000/query");

        let client = HttpQueryClient::for_origin("https://kb.example.com", "query");
        assert_eq!(client.endpoint(), "https://kb.example.com/query");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) is closed on any sane test host
        let client = HttpQueryClient::new("http://127.0.0.1:9/query");
        let err = client.query("anyone there?").await.unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)), "got {err:?}");
    }
}
