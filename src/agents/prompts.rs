//! Agent instruction templates bundled at compile time.

/// Coordinator - routes questions to the best specialist
pub const COORDINATOR: &str = include_str!("prompts/coordinator.md");

/// Grammar Expert - grammar, syntax, non-manual markers
pub const GRAMMAR_EXPERT: &str = include_str!("prompts/grammar_expert.md");

/// Vocabulary - sign descriptions and fingerspelling
pub const VOCABULARY_AGENT: &str = include_str!("prompts/vocabulary_agent.md");

/// Cultural - Deaf culture, community, history, etiquette
pub const CULTURAL_AGENT: &str = include_str!("prompts/cultural_agent.md");

/// Learning Resources - courses, apps, practice strategies
pub const LEARNING_AGENT: &str = include_str!("prompts/learning_agent.md");

/// General ASL - broad questions and overviews
pub const GENERAL_ASL_AGENT: &str = include_str!("prompts/general_asl_agent.md");

/// All instruction templates with their slugs
pub fn all_prompts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("coordinator", COORDINATOR),
        ("grammar_expert", GRAMMAR_EXPERT),
        ("vocabulary_agent", VOCABULARY_AGENT),
        ("cultural_agent", CULTURAL_AGENT),
        ("learning_agent", LEARNING_AGENT),
        ("general_asl_agent", GENERAL_ASL_AGENT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_prompts_non_empty() {
        for (slug, content) in all_prompts() {
            assert!(!content.trim().is_empty(), "Prompt '{}' should not be empty", slug);
            assert!(content.len() > 200, "Prompt '{}' seems too short", slug);
        }
    }

    #[test]
    fn test_coordinator_names_every_specialist() {
        for name in [
            "Grammar Expert",
            "Vocabulary Agent",
            "Cultural Agent",
            "Learning Resources Agent",
            "General ASL Agent",
        ] {
            assert!(COORDINATOR.contains(name), "coordinator prompt missing {}", name);
        }
    }
}
