//! IAM (SigV4) adapter
//!
//! Signing and transport belong to the cloud SDK; this module only shapes the
//! request, drains the streamed body and classifies failures.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockagentcore::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_bedrockagentcore::primitives::Blob;
use futures::stream::{self, BoxStream, StreamExt};

use super::{InvocationPayload, InvocationResult};
use crate::error::InvokeError;
use crate::session::new_session_id;
use crate::stream::collect_text;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Runtime endpoint qualifier
pub const QUALIFIER: &str = "DEFAULT";

/// Permissions the caller needs to invoke the runtime end to end
pub const REQUIRED_PERMISSIONS: [&str; 3] = [
    "bedrock-agentcore:InvokeAgentRuntime",
    "bedrock:InvokeModel",
    "bedrock:InvokeModelWithResponseStream",
];

/// Guidance shown when the runtime denies access
pub fn access_denied_remediation() -> String {
    let mut text = String::from("Tip: Ensure your IAM role has the following permissions:");
    for permission in REQUIRED_PERMISSIONS {
        text.push_str("\n  - ");
        text.push_str(permission);
    }
    text
}

/// Streamed response body
pub type ChunkStream = BoxStream<'static, Result<Vec<u8>, InvokeError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeRequest {
    pub agent_runtime_arn: String,
    pub qualifier: String,
    pub session_id: String,
    pub content_type: String,
    pub payload: Vec<u8>,
}

pub struct RuntimeResponse {
    pub status_code: u16,
    pub body: ChunkStream,
}

/// Signed runtime invocation
#[async_trait]
pub trait RuntimeInvoker: Send + Sync {
    async fn invoke(&self, request: RuntimeRequest) -> Result<RuntimeResponse, InvokeError>;
}

/// AWS SDK client using the ambient credential chain
pub struct AgentCoreInvoker {
    client: aws_sdk_bedrockagentcore::Client,
}

impl AgentCoreInvoker {
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            client: aws_sdk_bedrockagentcore::Client::new(&config),
        }
    }
}

fn classify<E>(err: E) -> InvokeError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.code() {
        Some(code) => InvokeError::Service {
            code: code.to_string(),
            message: err.message().unwrap_or_default().to_string(),
        },
        None => InvokeError::Other(DisplayErrorContext(&err).to_string()),
    }
}

#[async_trait]
impl RuntimeInvoker for AgentCoreInvoker {
    async fn invoke(&self, request: RuntimeRequest) -> Result<RuntimeResponse, InvokeError> {
        let output = self
            .client
            .invoke_agent_runtime()
            .agent_runtime_arn(request.agent_runtime_arn)
            .qualifier(request.qualifier)
            .runtime_session_id(request.session_id)
            .content_type(request.content_type)
            .payload(Blob::new(request.payload))
            .send()
            .await
            .map_err(classify)?;

        let status_code = output
            .status_code
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(200);

        let body = stream::unfold(output.response, |mut body| async move {
            match body.try_next().await {
                Ok(Some(bytes)) => Some((Ok(bytes.to_vec()), body)),
                Ok(None) => None,
                Err(e) => Some((Err(InvokeError::Other(e.to_string())), body)),
            }
        })
        .boxed();

        Ok(RuntimeResponse { status_code, body })
    }
}

/// Ask one question through a signed runtime call.
///
/// A missing session id is replaced by a fresh one. Access-denied failures
/// carry remediation text naming the required permissions.
pub async fn invoke_with_iam<F>(
    invoker: &dyn RuntimeInvoker,
    agent_runtime_arn: &str,
    question: &str,
    session_id: Option<&str>,
    on_chunk: F,
) -> InvocationResult
where
    F: FnMut(&str) + Send,
{
    let session_id = session_id
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(new_session_id);

    match send(invoker, agent_runtime_arn, question, &session_id, on_chunk).await {
        Ok(response) => InvocationResult::success(session_id, response),
        Err(err) => {
            tracing::warn!(session_id = %session_id, "Runtime invocation failed: {}", err);
            let result = InvocationResult::error(err.to_string());
            if err.is_access_denied() {
                result.with_remediation(access_denied_remediation())
            } else {
                result
            }
        }
    }
}

async fn send<F>(
    invoker: &dyn RuntimeInvoker,
    agent_runtime_arn: &str,
    question: &str,
    session_id: &str,
    on_chunk: F,
) -> Result<String, InvokeError>
where
    F: FnMut(&str) + Send,
{
    let payload = serde_json::to_vec(&InvocationPayload {
        input: question.to_string(),
        session_id: session_id.to_string(),
    })
    .map_err(|e| InvokeError::Other(e.to_string()))?;

    let response = invoker
        .invoke(RuntimeRequest {
            agent_runtime_arn: agent_runtime_arn.to_string(),
            qualifier: QUALIFIER.to_string(),
            session_id: session_id.to_string(),
            content_type: "application/json".to_string(),
            payload,
        })
        .await?;

    if response.status_code != 200 {
        return Err(InvokeError::Status(response.status_code));
    }

    collect_text(response.body, on_chunk).await
}
