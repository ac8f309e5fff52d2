//! Loop-prevention parameters handed to the swarm orchestrator

use serde::{Deserialize, Serialize};

/// Bounds on a single swarm run.
///
/// These values are declared here and passed through untouched; cycle
/// detection itself happens inside the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingPolicy {
    /// Upper bound on agent-to-agent transfers per request
    pub max_handoffs: u32,
    /// Upper bound on total orchestration steps per request
    pub max_iterations: u32,
    /// Number of recent handoffs examined for ping-pong behavior
    pub repetitive_handoff_detection_window: u32,
    /// A window with fewer distinct agents than this is flagged as a loop
    pub repetitive_handoff_min_unique_agents: u32,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            max_handoffs: 20,
            max_iterations: 20,
            repetitive_handoff_detection_window: 8,
            repetitive_handoff_min_unique_agents: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RoutingPolicy::default();
        assert_eq!(
            (
                policy.max_handoffs,
                policy.max_iterations,
                policy.repetitive_handoff_detection_window,
                policy.repetitive_handoff_min_unique_agents,
            ),
            (20, 20, 8, 3)
        );
    }
}
