//! GraphQL client for the skills endpoint.

use reqwest::{Client, Url};
use thiserror::Error;

use super::types::{Skill, SkillsEnvelope, SkillsRequest};

/// Errors from constructing the client or running one query
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The endpoint URL cannot be queried; fatal at startup
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Network-level failure reaching the endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// The response carried GraphQL errors instead of usable data
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client bound to one GraphQL endpoint for the life of the process
///
/// Construction validates the URL but opens no connection; connections
/// are established lazily when the first query runs. The handle is cheap
/// to clone and shared by every in-flight request task.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: Client,
    endpoint: Url,
}

impl SuggestClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: &str) -> Result<Self, SuggestError> {
        let url = Url::parse(endpoint).map_err(|e| SuggestError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SuggestError::InvalidEndpoint {
                    url: endpoint.to_string(),
                    reason: format!("unsupported scheme '{other}'"),
                });
            }
        }

        let http = Client::builder()
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: url,
        })
    }

    /// Endpoint this client is bound to
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Run one `skills` query with an already-wildcarded example string
    ///
    /// No timeout beyond the HTTP client's defaults and no retries; the
    /// caller decides what a failure means.
    pub async fn fetch(&self, example: &str) -> Result<Vec<Skill>, SuggestError> {
        let body = SkillsRequest::new(example);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let envelope: SkillsEnvelope = response
            .json()
            .await
            .map_err(|e| SuggestError::Parse(e.to_string()))?;

        envelope.into_skills()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
