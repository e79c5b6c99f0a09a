//! The boundary between the chat client and the analysis endpoint.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::error::RequestFailed;
use crate::protocol::{CHAT_PATH, ChatRequest, ResponsePayload};

/// Something that can analyze one message.
#[async_trait]
pub trait AnalysisEndpoint: Send + Sync {
    /// One attempt, no retry.
    async fn analyze(&self, message: &str) -> Result<ResponsePayload, RequestFailed>;
}

/// [`AnalysisEndpoint`] over HTTP: `POST {base}/chat` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    chat_url: Url,
    http: reqwest::Client,
}

impl HttpEndpoint {
    /// Create an endpoint for the server at `base_url`
    /// (e.g. "http://127.0.0.1:5000").
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, RequestFailed> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create an endpoint with an overall per-request timeout.
    pub fn with_timeout(
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self, RequestFailed> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, http)
    }

    /// Create an endpoint with a custom reqwest client.
    pub fn with_client(
        base_url: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, RequestFailed> {
        let chat_url = Url::parse(base_url.as_ref())?.join(CHAT_PATH)?;
        Ok(Self { chat_url, http })
    }

    /// Full URL requests are posted to.
    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }
}

#[async_trait]
impl AnalysisEndpoint for HttpEndpoint {
    async fn analyze(&self, message: &str) -> Result<ResponsePayload, RequestFailed> {
        let response = self
            .http
            .post(self.chat_url.clone())
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".into());
            return Err(RequestFailed::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Decode from bytes so a bad body surfaces as a decode error rather
        // than a transport error.
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
