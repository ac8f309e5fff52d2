//! Local test harness
//!
//! Drives the coordinator alone, without the hosting runtime, for manual
//! smoke testing.

use crate::config::ModelConfig;
use crate::error::OrchestratorError;
use crate::session::SessionContext;
use crate::swarm::{build_swarm_configuration, Orchestrator, RoutingPolicy, SwarmRun};

pub const DEFAULT_QUESTION: &str = "How do I sign 'thank you' in ASL?";

/// Questions covering each specialist's area
pub const EXAMPLE_QUESTIONS: [&str; 8] = [
    "How do I sign 'thank you' in ASL?",
    "What are Wh-questions in ASL?",
    "Tell me about Deaf culture",
    "Where can I learn ASL online?",
    "What is the difference between ASL and English?",
    "How do you form yes/no questions in ASL?",
    "What are non-manual markers?",
    "What is a name sign?",
];

/// Ask the coordinator one question directly
pub async fn ask_coordinator(
    model: &ModelConfig,
    policy: RoutingPolicy,
    orchestrator: &dyn Orchestrator,
    question: &str,
) -> Result<String, OrchestratorError> {
    let config = build_swarm_configuration(model)?;
    let session = SessionContext::new(None, None, question);
    orchestrator
        .run(SwarmRun::coordinator_only(&config, policy, &session))
        .await
}
