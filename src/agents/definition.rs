//! Static agent definition record

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One LLM persona: a name, a routing description, its instructions and the
/// hosted model it runs on.
///
/// Definitions are immutable once built; the orchestrator interprets the
/// instructions at inference time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    name: String,
    description: String,
    instructions: String,
    model_id: String,
}

impl AgentDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instructions: instructions.into(),
            model_id: model_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Reject definitions the orchestrator could not run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let empty = |field: &'static str| ConfigError::EmptyField {
            agent: self.name.clone(),
            field,
        };
        if self.name.trim().is_empty() {
            return Err(empty("name"));
        }
        if self.instructions.trim().is_empty() {
            return Err(empty("instruction string"));
        }
        if self.model_id.trim().is_empty() {
            return Err(empty("model identifier"));
        }
        Ok(())
    }
}
