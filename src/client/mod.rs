//! Chat client: input buffer, transcript, and the submit cycle.
//!
//! A submit is split into three steps so several requests can be in flight
//! while the transcript stays owned by a single task:
//!
//! 1. [`ChatClient::begin_submit`] appends the user entry and clears the input
//! 2. [`ChatClient::request`] performs the one network attempt
//! 3. [`ChatClient::apply_reply`] turns the outcome into one transcript entry
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use word_insight_chat::client::{ChatClient, HttpEndpoint};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = HttpEndpoint::new("http://127.0.0.1:5000")?;
//! let mut client = ChatClient::new(Arc::new(endpoint));
//!
//! client.set_input("the quick brown fox");
//! client.submit().await;
//!
//! for entry in client.transcript() {
//!     println!("{entry:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
pub mod render;
pub mod terminal;
mod transcript;
mod transport;

pub use error::RequestFailed;
pub use transcript::{Entry, Transcript};
pub use transport::{AnalysisEndpoint, HttpEndpoint};

use std::fmt;
use std::sync::Arc;

use crate::protocol::ResponsePayload;

/// Handle for a request that has been accepted but not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Position of this submit among all submits of the client, from 1.
    pub seq: u64,
    /// Trimmed message text.
    pub text: String,
}

/// Outcome of one request.
#[derive(Debug)]
pub struct Reply {
    pub seq: u64,
    pub result: Result<ResponsePayload, RequestFailed>,
}

/// Mediates between user input, the analysis endpoint and the transcript.
pub struct ChatClient {
    endpoint: Arc<dyn AnalysisEndpoint>,
    transcript: Transcript,
    input: String,
    last_seq: u64,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("transcript", &self.transcript)
            .field("input", &self.input)
            .field("last_seq", &self.last_seq)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    pub fn new(endpoint: Arc<dyn AnalysisEndpoint>) -> Self {
        Self {
            endpoint,
            transcript: Transcript::new(),
            input: String::new(),
            last_seq: 0,
        }
    }

    /// Replace the contents of the input field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Accept the current input.
    ///
    /// Returns `None` and changes nothing when the trimmed input is empty.
    /// Otherwise the user entry is appended and the input cleared before any
    /// network activity.
    pub fn begin_submit(&mut self) -> Option<PendingReply> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();

        self.transcript.push(Entry::User { text: text.clone() });
        self.input.clear();
        self.last_seq += 1;

        tracing::debug!(
            seq = self.last_seq,
            message_length = text.len(),
            "Message accepted"
        );

        Some(PendingReply {
            seq: self.last_seq,
            text,
        })
    }

    /// The single network attempt for `pending`.
    ///
    /// The returned future does not borrow the client, so any number of them
    /// can be polled concurrently.
    pub fn request(
        &self,
        pending: PendingReply,
    ) -> impl Future<Output = Reply> + Send + 'static {
        let endpoint = Arc::clone(&self.endpoint);
        async move {
            let result = endpoint.analyze(&pending.text).await;
            Reply {
                seq: pending.seq,
                result,
            }
        }
    }

    /// Append the entry for a finished request and return it.
    ///
    /// Failures become one generic [`Entry::Error`]; the cause only goes to
    /// the log.
    pub fn apply_reply(&mut self, reply: Reply) -> &Entry {
        match reply.result {
            Ok(payload) => {
                tracing::debug!(
                    seq = reply.seq,
                    last_word = %payload.last_word,
                    "Reply rendered"
                );
                self.transcript.push(Entry::Bot { payload })
            }
            Err(e) => {
                tracing::error!(
                    name: "chat.request.failed",
                    seq = reply.seq,
                    error = %e,
                    "Error processing request"
                );
                self.transcript.push(Entry::Error)
            }
        }
    }

    /// Submit the current input and wait for its reply.
    ///
    /// Returns `false` when the input was empty and nothing happened.
    pub async fn submit(&mut self) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let reply = self.request(pending).await;
        self.apply_reply(reply);
        true
    }
}
