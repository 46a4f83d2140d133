//! kb-chat HTTP Server
//!
//! Hosts the chat widget page and answers its questions.
//!
//! | route       | handler                                  |
//! |-------------|------------------------------------------|
//! | `GET /`     | `<STATIC_DIR>/index.html`                |
//! | `/static/*` | files under `STATIC_DIR`                 |
//! | `POST /query` | [`handlers::query_handler`]            |
//! | `GET /health` | [`handlers::health_check`]             |

pub mod config;
pub mod handlers;
pub mod state;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{health_check, query_handler};

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

/// Build the full router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(chat_core::QUERY_PATH, post(query_handler))
        // Widget page and its assets
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
