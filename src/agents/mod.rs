//! # ASL Agent Definitions
//!
//! One factory per persona. Each takes the model binding explicitly so the
//! same configuration always yields the same definitions.
//!
//! ```text
//! Coordinator ─┬─ Grammar Expert
//!              ├─ Vocabulary Agent
//!              ├─ Cultural Agent
//!              ├─ Learning Resources Agent
//!              └─ General ASL Agent
//! ```

mod definition;
pub mod prompts;

pub use definition::AgentDefinition;

use crate::config::ModelConfig;

/// The coordinator agent
///
/// Entry point of every swarm run. Its instructions describe the routing
/// heuristics; the model applies them when choosing a handoff.
pub fn coordinator_agent(model: &ModelConfig) -> AgentDefinition {
    AgentDefinition::new(
        "ASL Q&A Coordinator",
        "Main coordinator that routes ASL questions to specialized agents using Swarm pattern",
        prompts::COORDINATOR,
        &model.model_id,
    )
}

/// Grammar, syntax and linguistic structure
pub fn grammar_expert(model: &ModelConfig) -> AgentDefinition {
    AgentDefinition::new(
        "ASL Grammar Expert",
        "Expert in ASL grammar, syntax, linguistic structure, and grammatical rules \
         including questions, sentence structure, and non-manual markers",
        prompts::GRAMMAR_EXPERT,
        &model.model_id,
    )
}

/// Signs, vocabulary and fingerspelling
pub fn vocabulary_agent(model: &ModelConfig) -> AgentDefinition {
    AgentDefinition::new(
        "ASL Vocabulary Agent",
        "Expert in ASL signs, vocabulary, meanings, translations, sign descriptions, \
         and fingerspelling",
        prompts::VOCABULARY_AGENT,
        &model.model_id,
    )
}

/// Deaf culture, community and etiquette
pub fn cultural_agent(model: &ModelConfig) -> AgentDefinition {
    AgentDefinition::new(
        "ASL Cultural Agent",
        "Expert in Deaf culture, community, history, etiquette, and social aspects \
         of the Deaf world",
        prompts::CULTURAL_AGENT,
        &model.model_id,
    )
}

/// Learning resources and study strategies
pub fn learning_agent(model: &ModelConfig) -> AgentDefinition {
    AgentDefinition::new(
        "ASL Learning Resources Agent",
        "Expert in ASL learning materials, courses, tutorials, practice resources, \
         and educational strategies for all skill levels",
        prompts::LEARNING_AGENT,
        &model.model_id,
    )
}

/// Broad questions that need no deep specialization
pub fn general_asl_agent(model: &ModelConfig) -> AgentDefinition {
    AgentDefinition::new(
        "General ASL Agent",
        "General knowledge agent for broad ASL questions covering language, culture, \
         and learning",
        prompts::GENERAL_ASL_AGENT,
        &model.model_id,
    )
}
