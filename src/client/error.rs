//! Error type for a failed analysis request.

use thiserror::Error;

/// The one way a submit can fail.
///
/// Variants record the cause for the diagnostic log. The transcript never
/// distinguishes them: every variant renders as the same generic error entry.
#[derive(Error, Debug)]
pub enum RequestFailed {
    /// Connection, TLS, timeout or other transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The body was not a valid response payload.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
