//! # Runtime Entrypoint
//!
//! One inbound request becomes one delegated swarm run. Every failure is
//! converted into an [`InvocationOutcome::Failed`] payload at this boundary.

mod server;

pub use server::{router, serve};

use std::sync::Arc;

use serde::Serialize;

use crate::config::ModelConfig;
use crate::session::SessionContext;
use crate::swarm::{build_swarm_configuration, Orchestrator, RoutingPolicy, SwarmRun};

/// Prefix of every error message returned to the caller
pub const ERROR_PREFIX: &str = "Error processing ASL question";

/// Result handed back to the hosting runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InvocationOutcome {
    Completed { session_id: String, response: String },
    Failed { error: String },
}

impl InvocationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, InvocationOutcome::Completed { .. })
    }
}

/// Builds the swarm and delegates each request to the orchestrator
#[derive(Clone)]
pub struct Entrypoint {
    model: ModelConfig,
    policy: RoutingPolicy,
    orchestrator: Arc<dyn Orchestrator>,
}

impl Entrypoint {
    pub fn new(model: ModelConfig, policy: RoutingPolicy, orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self {
            model,
            policy,
            orchestrator,
        }
    }

    pub fn policy(&self) -> RoutingPolicy {
        self.policy
    }

    /// Run the full swarm for one request, entering at the coordinator
    pub async fn invoke(&self, session: SessionContext) -> InvocationOutcome {
        tracing::info!(
            session_id = %session.session_id,
            user_id = %session.user_id,
            input_len = session.input.len(),
            "Handling invocation"
        );

        let result = match build_swarm_configuration(&self.model) {
            Ok(config) => {
                let run = SwarmRun::new(&config, self.policy, &session);
                self.orchestrator.run(run).await
            }
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(response) => InvocationOutcome::Completed {
                session_id: session.session_id,
                response,
            },
            Err(e) => {
                let error = format!("{}: {}", ERROR_PREFIX, e);
                tracing::error!(session_id = %session.session_id, "{}", error);
                InvocationOutcome::Failed { error }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::OrchestratorError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Orchestrator double that records runs and replies with a fixed result
    pub(crate) struct ScriptedOrchestrator {
        reply: Result<String, String>,
        pub(crate) runs: Mutex<Vec<SwarmRun>>,
    }

    impl ScriptedOrchestrator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                runs: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                runs: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Orchestrator for ScriptedOrchestrator {
        async fn run(&self, run: SwarmRun) -> Result<String, OrchestratorError> {
            self.runs.lock().unwrap().push(run);
            self.reply.clone().map_err(OrchestratorError::Other)
        }
    }

    const QUESTION: &str = "How do I sign 'thank you' in ASL?";

    #[tokio::test]
    async fn test_invoke_delegates_full_swarm() {
        let orchestrator = Arc::new(ScriptedOrchestrator::replying(
            "Touch your chin with a flat hand and move it forward.",
        ));
        let entrypoint = Entrypoint::new(
            ModelConfig::default(),
            RoutingPolicy::default(),
            orchestrator.clone(),
        );

        let session = SessionContext::new(None, None, QUESTION);
        let session_id = session.session_id.clone();
        let outcome = entrypoint.invoke(session).await;

        match outcome {
            InvocationOutcome::Completed { session_id: id, response } => {
                assert_eq!(id, session_id);
                assert!(!response.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let runs = orchestrator.runs.lock().unwrap();
        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        assert_eq!(run.agents.len(), 6);
        assert_eq!(run.entry_point, "ASL Q&A Coordinator");
        assert_eq!(run.input, QUESTION);
        assert_eq!(run.policy, RoutingPolicy::default());
    }

    #[tokio::test]
    async fn test_orchestrator_failure_becomes_payload() {
        let entrypoint = Entrypoint::new(
            ModelConfig::default(),
            RoutingPolicy::default(),
            Arc::new(ScriptedOrchestrator::failing("model throttled")),
        );

        let outcome = entrypoint.invoke(SessionContext::new(None, None, QUESTION)).await;
        assert_eq!(
            outcome,
            InvocationOutcome::Failed {
                error: "Error processing ASL question: model throttled".to_string()
            }
        );
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"error": "Error processing ASL question: model throttled"})
        );
    }

    #[tokio::test]
    async fn test_invalid_model_never_reaches_orchestrator() {
        let orchestrator = Arc::new(ScriptedOrchestrator::replying("unused"));
        let entrypoint = Entrypoint::new(
            ModelConfig::new(""),
            RoutingPolicy::default(),
            orchestrator.clone(),
        );

        let outcome = entrypoint.invoke(SessionContext::new(None, None, QUESTION)).await;
        assert!(!outcome.is_completed());
        assert!(orchestrator.runs.lock().unwrap().is_empty());
    }
}
