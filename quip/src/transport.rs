//! HTTP transport for the bot-posting endpoint.

use async_trait::async_trait;
use quip_core::{Post, SendError, Transport};
use reqwest::StatusCode;

/// The public bot-posting endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.groupme.com/v3/bots/post";

/// Posts JSON to the bot endpoint with `reqwest`.
///
/// Only `202 Accepted` counts as success; any other status is reported as
/// [`SendError::Rejected`] carrying the response body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a transport reusing an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint posts are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, post: &Post) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(post)
            .send()
            .await
            .map_err(|e| SendError::Transport(Box::new(e)))?;

        let status = response.status();
        if status == StatusCode::ACCEPTED {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        tracing::warn!(%status, endpoint = %self.endpoint, "post rejected");
        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
