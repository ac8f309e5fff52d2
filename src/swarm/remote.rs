//! HTTP binding to an external swarm service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use super::{Orchestrator, SwarmRun};
use crate::error::OrchestratorError;
use crate::invoke::SESSION_HEADER;
use crate::stream::collect_text;

/// Path of the run operation on the swarm service
const RUN_PATH: &str = "/swarm/run";

/// Delegates swarm runs to a remote orchestration service.
///
/// The run description is POSTed as JSON and the streamed text body is
/// concatenated into the final answer.
pub struct RemoteOrchestrator {
    http_client: reqwest::Client,
    endpoint: String,
}

impl RemoteOrchestrator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, OrchestratorError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.endpoint, RUN_PATH)
    }

    fn headers(&self, session_id: &str) -> Result<HeaderMap, OrchestratorError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            SESSION_HEADER,
            HeaderValue::from_str(session_id)
                .map_err(|e| OrchestratorError::Other(format!("Invalid session id: {}", e)))?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl Orchestrator for RemoteOrchestrator {
    async fn run(&self, run: SwarmRun) -> Result<String, OrchestratorError> {
        tracing::debug!(
            session_id = %run.session_id,
            agents = run.agents.len(),
            entry_point = %run.entry_point,
            "Dispatching swarm run"
        );

        let response = self
            .http_client
            .post(self.url())
            .headers(self.headers(&run.session_id)?)
            .json(&run)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(OrchestratorError::Status { status, body });
        }

        let text = collect_text(response.bytes_stream(), |_| {}).await?;
        if text.trim().is_empty() {
            return Err(OrchestratorError::Other(
                "orchestrator returned an empty response".to_string(),
            ));
        }
        Ok(text)
    }
}
