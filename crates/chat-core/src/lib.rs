//! # chat-core
//!
//! Conversation model and widget logic shared by the browser front end and
//! the answer server.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      QueryDispatcher                          │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ MessageRenderer  │──│   ChatView   │  │  QueryClient   │  │
//! │  │  (append+scroll) │  │   (seam)     │  │  (seam)        │  │
//! │  └──────────────────┘  └──────────────┘  └────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ChatView` is implemented by the Leptos widget in the browser and by
//! [`view::MemoryView`] everywhere else. `QueryClient` is implemented by
//! [`client::HttpQueryClient`], which posts to `/query`.
//!
//! The server side shares the wire types in [`wire`] and talks to language
//! models through the [`provider::LlmProvider`] strategy trait.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod provider;
pub mod renderer;
pub mod view;
pub mod wire;

pub use client::{HttpQueryClient, QueryClient};
pub use config::WidgetConfig;
pub use dispatcher::{QueryDispatcher, Submission};
pub use error::{ChatError, Result, FALLBACK_MESSAGE};
pub use message::{ClockFormat, Message, Role};
pub use provider::LlmProvider;
pub use renderer::MessageRenderer;
pub use view::ChatView;
pub use wire::{QueryRequest, QueryResponse, QUERY_PATH};
