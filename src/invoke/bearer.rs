//! OAuth bearer token adapter

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::{InvocationPayload, InvocationResult, SESSION_HEADER};
use crate::session::new_session_id;
use crate::stream::collect_text;

/// Client-side timeout for one invocation
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

enum Failure {
    Http { status: u16, body: String },
    Request(reqwest::Error),
    Unexpected(String),
}

impl Failure {
    fn message(&self) -> String {
        match self {
            Failure::Http { status, body } => format!("HTTP Error: {} - {}", status, body),
            Failure::Request(e) => format!("Request Error: {}", e),
            Failure::Unexpected(e) => format!("Unexpected Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Failure {
    fn from(e: reqwest::Error) -> Self {
        Failure::Request(e)
    }
}

/// Invokes the runtime endpoint with a JWT bearer token
pub struct BearerClient {
    http_client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl BearerClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, token, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    /// Build headers for the invocation request
    fn headers(&self, session_id: &str) -> Result<HeaderMap, Failure> {
        let value = |v: String, what: &str| {
            HeaderValue::from_str(&v).map_err(|_| Failure::Unexpected(format!("Invalid {}", what)))
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, value(format!("Bearer {}", self.token), "bearer token")?);
        headers.insert(SESSION_HEADER, value(session_id.to_string(), "session id")?);
        Ok(headers)
    }

    /// Ask one question, streaming the answer through `on_chunk`.
    ///
    /// A missing session id is replaced by a fresh one. Every failure is
    /// reported in the returned result.
    pub async fn invoke<F>(&self, question: &str, session_id: Option<&str>, on_chunk: F) -> InvocationResult
    where
        F: FnMut(&str),
    {
        let session_id = session_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(new_session_id);

        match self.send(question, &session_id, on_chunk).await {
            Ok(response) => InvocationResult::success(session_id, response),
            Err(failure) => {
                let message = failure.message();
                tracing::warn!(session_id = %session_id, "Invocation failed: {}", message);
                InvocationResult::error(message)
            }
        }
    }

    async fn send<F>(&self, question: &str, session_id: &str, on_chunk: F) -> Result<String, Failure>
    where
        F: FnMut(&str),
    {
        let payload = InvocationPayload {
            input: question.to_string(),
            session_id: session_id.to_string(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .headers(self.headers(session_id)?)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Failure::Http { status, body });
        }

        Ok(collect_text(response.bytes_stream(), on_chunk).await?)
    }
}
