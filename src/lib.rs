//! ASL Swarm - an American Sign Language Q&A agent swarm
//!
//! A coordinator agent and five specialists are defined here and handed to an
//! external swarm orchestrator, which performs the model calls and handoffs.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use asl_swarm::{Entrypoint, ModelConfig, RemoteOrchestrator, RoutingPolicy, SessionContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let orchestrator = RemoteOrchestrator::new("http://localhost:9000", Duration::from_secs(300))?;
//!     let entrypoint = Entrypoint::new(
//!         ModelConfig::default(),
//!         RoutingPolicy::default(),
//!         Arc::new(orchestrator),
//!     );
//!
//!     let session = SessionContext::new(None, None, "How do I sign 'thank you' in ASL?");
//!     let outcome = entrypoint.invoke(session).await;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod config;
pub mod error;
pub mod harness;
pub mod invoke;
pub mod runtime;
pub mod session;
pub mod stream;
pub mod swarm;

// Re-export the public API
pub use agents::AgentDefinition;
pub use config::{Config, ModelConfig};
pub use error::{ConfigError, InvokeError, OrchestratorError};
pub use invoke::{InvocationResult, InvocationStatus};
pub use runtime::{Entrypoint, InvocationOutcome};
pub use session::SessionContext;
pub use swarm::{
    build_swarm_configuration, Orchestrator, RemoteOrchestrator, RoutingPolicy, SpecialistRole,
    SwarmConfiguration, SwarmRun,
};
