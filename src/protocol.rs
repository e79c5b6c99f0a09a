//! Wire types for the `/chat` endpoint.
//!
//! These types are shared by the analysis server and the chat client so both
//! sides agree on one schema.

use serde::{Deserialize, Serialize};

/// Fixed path of the analysis endpoint.
pub const CHAT_PATH: &str = "/chat";

/// Request body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Analysis result for one submitted message.
///
/// Every field is a pre-formatted display string. Decoding rejects missing or
/// non-string fields instead of substituting defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Last whitespace-separated word of the message.
    pub last_word: String,
    /// Most frequent words seen so far.
    pub top_words: String,
    /// Stored words sharing `last_word` as a prefix.
    pub suggestions: String,
    /// Predicted follower of `last_word`.
    pub next_word: String,
    /// Words observed directly after `last_word`.
    pub related_words: String,
}

/// Error body returned by the server on rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
