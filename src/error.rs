//! Error types

use thiserror::Error;

/// Configuration errors detected before any network call
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("agent '{agent}' has an empty {field}")]
    EmptyField { agent: String, field: &'static str },

    #[error("{0}")]
    Missing(String),
}

/// Failures raised by the delegated swarm run
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("orchestrator returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("orchestrator request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid swarm configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

/// Failures from the IAM-signed runtime invocation
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Error reported by the cloud service (e.g. `AccessDeniedException`)
    #[error("AWS Error ({code}): {message}")]
    Service { code: String, message: String },

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Unexpected Error: {0}")]
    Other(String),
}

impl InvokeError {
    pub const ACCESS_DENIED: &'static str = "AccessDeniedException";

    pub fn is_access_denied(&self) -> bool {
        matches!(self, InvokeError::Service { code, .. } if code == Self::ACCESS_DENIED)
    }
}
