//! HTTP surface expected by the managed agent runtime
//!
//! - `POST /invocations` - one question in, one outcome out
//! - `GET /ping` - health check

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;

use super::{Entrypoint, InvocationOutcome};
use crate::invoke::{SESSION_HEADER, USER_HEADER};
use crate::session::SessionContext;

pub fn router(entrypoint: Entrypoint) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/invocations", post(invocations))
        .with_state(entrypoint)
}

/// Bind and serve until Ctrl+C
pub async fn serve(listen: &str, entrypoint: Entrypoint) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind to {}", listen))?;

    info!("Agent runtime listening on {}", listen);

    axum::serve(listener, router(entrypoint))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Agent runtime shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn ping() -> Json<Value> {
    Json(json!({ "status": "Healthy" }))
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

async fn invocations(
    State(entrypoint): State<Entrypoint>,
    headers: HeaderMap,
    body: Bytes,
) -> (HeaderMap, Json<InvocationOutcome>) {
    // Non-JSON bodies are taken as plain text
    let payload: Value = serde_json::from_slice(&body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));

    let session_id = header(&headers, SESSION_HEADER).or_else(|| {
        payload
            .get("session_id")
            .and_then(Value::as_str)
            .map(str::to_string)
    });
    let session = SessionContext::from_payload(session_id, header(&headers, USER_HEADER), &payload);

    let mut response_headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&session.session_id) {
        response_headers.insert(SESSION_HEADER, value);
    }

    let outcome = entrypoint.invoke(session).await;
    (response_headers, Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::runtime::tests::ScriptedOrchestrator;
    use crate::swarm::RoutingPolicy;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(orchestrator: Arc<ScriptedOrchestrator>) -> Router {
        router(Entrypoint::new(
            ModelConfig::default(),
            RoutingPolicy::default(),
            orchestrator,
        ))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let response = app(Arc::new(ScriptedOrchestrator::replying("x")))
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "Healthy"}));
    }

    #[tokio::test]
    async fn test_invocation_with_headers() {
        let orchestrator = Arc::new(ScriptedOrchestrator::replying("Use a flat hand."));
        let request = Request::post("/invocations")
            .header("content-type", "application/json")
            .header(SESSION_HEADER, "session-from-header")
            .header(USER_HEADER, "user-42")
            .body(Body::from(r#"{"prompt": "How do I sign hello?"}"#))
            .unwrap();

        let response = app(orchestrator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(SESSION_HEADER).unwrap(),
            "session-from-header"
        );
        assert_eq!(
            body_json(response).await,
            json!({"session_id": "session-from-header", "response": "Use a flat hand."})
        );

        let runs = orchestrator.runs.lock().unwrap();
        assert_eq!(runs[0].input, "How do I sign hello?");
        assert_eq!(runs[0].user_id, "user-42");
    }

    #[tokio::test]
    async fn test_invocation_session_from_body() {
        let orchestrator = Arc::new(ScriptedOrchestrator::replying("ok"));
        let request = Request::post("/invocations")
            .body(Body::from(r#"{"input": "hi", "session_id": "body-session"}"#))
            .unwrap();

        let response = app(orchestrator.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.headers().get(SESSION_HEADER).unwrap(), "body-session");
        assert_eq!(orchestrator.runs.lock().unwrap()[0].user_id, "anonymous");
    }

    #[tokio::test]
    async fn test_empty_session_header_falls_back_to_body() {
        let orchestrator = Arc::new(ScriptedOrchestrator::replying("ok"));
        let request = Request::post("/invocations")
            .header(SESSION_HEADER, "")
            .body(Body::from(r#"{"input": "hi", "session_id": "body-session"}"#))
            .unwrap();

        let response = app(orchestrator.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.headers().get(SESSION_HEADER).unwrap(), "body-session");
        assert_eq!(orchestrator.runs.lock().unwrap()[0].session_id, "body-session");
    }

    #[tokio::test]
    async fn test_plain_text_body_and_failure() {
        let orchestrator = Arc::new(ScriptedOrchestrator::failing("upstream down"));
        let request = Request::post("/invocations")
            .body(Body::from("What is a name sign?"))
            .unwrap();

        let response = app(orchestrator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(SESSION_HEADER));
        assert_eq!(
            body_json(response).await,
            json!({"error": "Error processing ASL question: upstream down"})
        );
        assert_eq!(orchestrator.runs.lock().unwrap()[0].input, "What is a name sign?");
    }
}
