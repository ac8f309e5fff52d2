//! Client-side adapters for calling the deployed runtime
//!
//! Two independent transports share only the result shape:
//! - `bearer` - HTTP POST with an OAuth bearer token
//! - `iam` - SDK call signed with ambient cloud credentials

pub mod bearer;
pub mod iam;

use serde::{Deserialize, Serialize};

pub use bearer::BearerClient;
pub use iam::{invoke_with_iam, AgentCoreInvoker, RuntimeInvoker, DEFAULT_REGION};

/// Header carrying the runtime session id. Must stay lowercase for
/// `HeaderName::from_static`.
pub const SESSION_HEADER: &str = "x-amzn-bedrock-agentcore-runtime-session-id";

/// Header carrying the caller's user id
pub const USER_HEADER: &str = "x-amzn-bedrock-agentcore-runtime-user-id";

/// JSON body sent to the runtime by both adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationPayload {
    pub input: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStatus {
    Success,
    Error,
}

/// Outcome of one adapter call; failures are values, never panics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub status: InvocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Extra guidance for the operator (e.g. missing permissions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl InvocationResult {
    pub fn success(session_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            response: Some(response.into()),
            status: InvocationStatus::Success,
            error: None,
            remediation: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            session_id: None,
            response: None,
            status: InvocationStatus::Error,
            error: Some(message.into()),
            remediation: None,
        }
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == InvocationStatus::Success
    }

    /// Process exit code for the CLI tools
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
