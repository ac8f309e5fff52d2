//! Per-request session context and input normalization

use serde::Serialize;
use serde_json::Value;

/// User id recorded when the transport carries none
pub const ANONYMOUS_USER: &str = "anonymous";

/// Generate a fresh opaque session identifier
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Collapse the accepted request shapes into one input string.
///
/// A bare string is used as-is; an object contributes its `"input"` field,
/// or its `"prompt"` field when `"input"` is absent. Anything else is
/// stringified.
pub fn normalize_input(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        Value::Object(map) => ["input", "prompt"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| payload.to_string()),
        other => other.to_string(),
    }
}

/// One inbound request on its way to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub session_id: String,
    pub user_id: String,
    pub input: String,
}

impl SessionContext {
    /// Build a context, generating a session id when none (or an empty one)
    /// is supplied
    pub fn new(session_id: Option<String>, user_id: Option<String>, input: impl Into<String>) -> Self {
        Self {
            session_id: session_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(new_session_id),
            user_id: user_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            input: input.into(),
        }
    }

    /// Build a context from a raw request payload
    pub fn from_payload(session_id: Option<String>, user_id: Option<String>, payload: &Value) -> Self {
        Self::new(session_id, user_id, normalize_input(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_string() {
        assert_eq!(normalize_input(&json!("hello")), "hello");
    }

    #[test]
    fn test_normalize_object() {
        assert_eq!(normalize_input(&json!({"input": "hello"})), "hello");
        assert_eq!(normalize_input(&json!({"prompt": "hello"})), "hello");
        // "input" wins over "prompt"
        assert_eq!(
            normalize_input(&json!({"prompt": "second", "input": "first"})),
            "first"
        );
    }

    #[test]
    fn test_normalize_unrecognized() {
        assert_eq!(normalize_input(&json!({"question": "hi"})), r#"{"question":"hi"}"#);
        assert_eq!(normalize_input(&json!(42)), "42");
        assert_eq!(normalize_input(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(normalize_input(&Value::Null), "null");
    }

    #[test]
    fn test_generated_session_ids() {
        let first = SessionContext::new(None, None, "q");
        let second = SessionContext::new(Some(String::new()), None, "q");

        assert!(uuid::Uuid::parse_str(&first.session_id).is_ok());
        assert!(uuid::Uuid::parse_str(&second.session_id).is_ok());
        assert_ne!(first.session_id, second.session_id);
        assert_eq!(first.user_id, ANONYMOUS_USER);
    }

    #[test]
    fn test_explicit_ids_are_kept() {
        let ctx = SessionContext::from_payload(
            Some("session-1".to_string()),
            Some("user-7".to_string()),
            &json!({"input": "What are Wh-questions in ASL?"}),
        );
        assert_eq!(ctx.session_id, "session-1");
        assert_eq!(ctx.user_id, "user-7");
        assert_eq!(ctx.input, "What are Wh-questions in ASL?");
    }
}
