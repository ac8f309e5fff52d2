//! Orchestrator seam

use async_trait::async_trait;
use serde::Serialize;

use super::{RoutingPolicy, SwarmConfiguration};
use crate::agents::AgentDefinition;
use crate::error::OrchestratorError;
use crate::session::SessionContext;

/// Everything the orchestrator needs for one request
#[derive(Debug, Clone, Serialize)]
pub struct SwarmRun {
    pub agents: Vec<AgentDefinition>,
    /// Name of the agent that receives the input first
    pub entry_point: String,
    pub policy: RoutingPolicy,
    pub session_id: String,
    pub user_id: String,
    pub input: String,
}

impl SwarmRun {
    /// Full swarm with the coordinator as entry point
    pub fn new(config: &SwarmConfiguration, policy: RoutingPolicy, session: &SessionContext) -> Self {
        Self::with_agents(
            config.agents().into_iter().cloned().collect(),
            config.coordinator(),
            policy,
            session,
        )
    }

    /// The coordinator alone, with no specialists to hand off to
    pub fn coordinator_only(
        config: &SwarmConfiguration,
        policy: RoutingPolicy,
        session: &SessionContext,
    ) -> Self {
        Self::with_agents(vec![config.coordinator().clone()], config.coordinator(), policy, session)
    }

    fn with_agents(
        agents: Vec<AgentDefinition>,
        entry_point: &AgentDefinition,
        policy: RoutingPolicy,
        session: &SessionContext,
    ) -> Self {
        Self {
            agents,
            entry_point: entry_point.name().to_string(),
            policy,
            session_id: session.session_id.clone(),
            user_id: session.user_id.clone(),
            input: session.input.clone(),
        }
    }
}

/// The external component that performs model calls and handoffs.
///
/// Routing, streaming and cycle detection all live behind this trait.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Run the swarm to completion and return its final text
    async fn run(&self, run: SwarmRun) -> Result<String, OrchestratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::swarm::build_swarm_configuration;

    #[test]
    fn test_full_run_description() {
        let config = build_swarm_configuration(&ModelConfig::default()).unwrap();
        let session = SessionContext::new(Some("s-1".to_string()), None, "hello");
        let run = SwarmRun::new(&config, RoutingPolicy::default(), &session);

        assert_eq!(run.agents.len(), 6);
        assert_eq!(run.entry_point, "ASL Q&A Coordinator");
        assert_eq!(run.agents[0].name(), run.entry_point);
        assert_eq!(run.session_id, "s-1");
        assert_eq!(run.input, "hello");
    }

    #[test]
    fn test_coordinator_only_run() {
        let config = build_swarm_configuration(&ModelConfig::default()).unwrap();
        let session = SessionContext::new(None, None, "hello");
        let run = SwarmRun::coordinator_only(&config, RoutingPolicy::default(), &session);

        assert_eq!(run.agents.len(), 1);
        assert_eq!(run.agents[0].name(), run.entry_point);
    }

    #[test]
    fn test_wire_shape() {
        let config = build_swarm_configuration(&ModelConfig::default()).unwrap();
        let session = SessionContext::new(Some("s-1".to_string()), Some("u".to_string()), "hi");
        let json = serde_json::to_value(SwarmRun::new(&config, RoutingPolicy::default(), &session))
            .unwrap();

        assert_eq!(json["policy"]["max_handoffs"], 20);
        assert_eq!(json["policy"]["repetitive_handoff_min_unique_agents"], 3);
        assert_eq!(json["agents"].as_array().unwrap().len(), 6);
        assert_eq!(json["user_id"], "u");
    }
}
