//! # Swarm Configuration
//!
//! Assembles the coordinator and the five specialists into one registry and
//! hands it, with the routing policy, to an [`Orchestrator`].
//!
//! ```text
//! SessionContext + SwarmConfiguration + RoutingPolicy
//!     → SwarmRun → Orchestrator::run → text
//! ```

mod orchestrator;
mod policy;
mod remote;

pub use orchestrator::{Orchestrator, SwarmRun};
pub use policy::RoutingPolicy;
pub use remote::RemoteOrchestrator;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::agents::{self, AgentDefinition};
use crate::config::ModelConfig;
use crate::error::ConfigError;

/// Registry key of a specialist agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistRole {
    GrammarExpert,
    VocabularyAgent,
    CulturalAgent,
    LearningAgent,
    GeneralAslAgent,
}

impl SpecialistRole {
    pub const ALL: [SpecialistRole; 5] = [
        SpecialistRole::GrammarExpert,
        SpecialistRole::VocabularyAgent,
        SpecialistRole::CulturalAgent,
        SpecialistRole::LearningAgent,
        SpecialistRole::GeneralAslAgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialistRole::GrammarExpert => "grammar_expert",
            SpecialistRole::VocabularyAgent => "vocabulary_agent",
            SpecialistRole::CulturalAgent => "cultural_agent",
            SpecialistRole::LearningAgent => "learning_agent",
            SpecialistRole::GeneralAslAgent => "general_asl_agent",
        }
    }

    /// Build the definition for this role
    pub fn definition(&self, model: &ModelConfig) -> AgentDefinition {
        match self {
            SpecialistRole::GrammarExpert => agents::grammar_expert(model),
            SpecialistRole::VocabularyAgent => agents::vocabulary_agent(model),
            SpecialistRole::CulturalAgent => agents::cultural_agent(model),
            SpecialistRole::LearningAgent => agents::learning_agent(model),
            SpecialistRole::GeneralAslAgent => agents::general_asl_agent(model),
        }
    }
}

impl fmt::Display for SpecialistRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The coordinator plus the specialists it can hand off to.
///
/// The coordinator is never a specialist key, but [`SwarmConfiguration::agents`]
/// returns both as one execution set.
#[derive(Debug, Clone)]
pub struct SwarmConfiguration {
    coordinator: AgentDefinition,
    specialists: BTreeMap<SpecialistRole, AgentDefinition>,
}

impl SwarmConfiguration {
    pub fn coordinator(&self) -> &AgentDefinition {
        &self.coordinator
    }

    pub fn specialists(&self) -> &BTreeMap<SpecialistRole, AgentDefinition> {
        &self.specialists
    }

    pub fn specialist(&self, role: SpecialistRole) -> Option<&AgentDefinition> {
        self.specialists.get(&role)
    }

    /// Coordinator first, then specialists in role order
    pub fn agents(&self) -> Vec<&AgentDefinition> {
        std::iter::once(&self.coordinator)
            .chain(self.specialists.values())
            .collect()
    }

    /// Total number of agents in the execution set
    pub fn len(&self) -> usize {
        1 + self.specialists.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Human-readable listing of the registry
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Coordinator: {}\nSpecialized Agents: {}\n",
            self.coordinator.name(),
            self.specialists.len()
        );
        for (role, agent) in &self.specialists {
            out.push_str(&format!("  - {}: {}\n", role, agent.name()));
        }
        out
    }
}

/// Build the full ASL swarm.
///
/// Deterministic for a given model binding; fails fast if any definition
/// lacks instructions or a model identifier.
pub fn build_swarm_configuration(model: &ModelConfig) -> Result<SwarmConfiguration, ConfigError> {
    let coordinator = agents::coordinator_agent(model);
    coordinator.validate()?;

    let mut specialists = BTreeMap::new();
    for role in SpecialistRole::ALL {
        let agent = role.definition(model);
        agent.validate()?;
        specialists.insert(role, agent);
    }

    tracing::debug!(
        model_id = %model.model_id,
        specialists = specialists.len(),
        "Built swarm configuration"
    );

    Ok(SwarmConfiguration {
        coordinator,
        specialists,
    })
}
