//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use chat_core::wire::{QueryRequest, QueryResponse};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub llm_connected: bool,
    pub knowledge_chunks: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let llm_connected = state.provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.provider.name().to_owned(),
        llm_connected,
        knowledge_chunks: state.knowledge.len(),
    })
}

/// Answer one widget question
pub async fn query_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<ErrorResponse>)> {
    tracing::info!(question = %payload.question, "query received");

    let answer = state.workflow.answer(&payload.question).await.map_err(|e| {
        tracing::error!(code = e.code(), "Workflow error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
                code: "QUERY_FAILED".into(),
            }),
        )
    })?;

    Ok(Json(QueryResponse {
        question: Some(answer.question),
        category: Some(answer.category.to_string()),
        answer: answer.answer,
    }))
}
