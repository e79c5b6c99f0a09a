//! Word Insight Chat
//!
//! A chat-style client that sends each message to a word-analysis endpoint
//! and renders the returned statistics as a card, together with the analysis
//! server it talks to.
//!
//! # Architecture
//!
//! - **Client**: input buffer, append-only transcript, one HTTP request per message
//! - **Server**: Axum `POST /chat` over a shared analysis engine
//! - **Engine**: prefix trie, bigram predictor, word index and word graph
//!
//! # Modules
//!
//! - [`client`]: chat client, rendering and terminal front-end
//! - [`config`]: CLI and layered configuration
//! - [`engine`]: word analysis engine
//! - [`protocol`]: wire types shared by client and server
//! - [`server`]: HTTP server

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod client;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod server;

use crate::config::AppConfig;

use engine::TextEngine;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Analysis engine; every request mutates it.
    pub engine: Arc<RwLock<TextEngine>>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with a fresh, empty engine.
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            engine: Arc::new(RwLock::new(TextEngine::new())),
            config,
        }
    }
}
