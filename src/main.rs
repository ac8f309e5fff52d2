use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asl_swarm::config::ORCHESTRATOR_URL_ENV;
use asl_swarm::harness::{self, DEFAULT_QUESTION, EXAMPLE_QUESTIONS};
use asl_swarm::runtime;
use asl_swarm::{build_swarm_configuration, Config, Entrypoint, RemoteOrchestrator};

/// ASL Swarm - agent runtime for ASL question answering
#[derive(Parser, Debug)]
#[command(name = "asl-swarm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/asl-swarm/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the agent runtime HTTP contract
    Serve {
        /// Address to listen on (overrides config)
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Print the swarm configuration
    Agents,

    /// Ask the coordinator a question directly, bypassing the runtime
    Ask {
        /// Question to ask the agent
        #[arg(short, long, default_value = DEFAULT_QUESTION)]
        question: String,
    },
}

fn orchestrator(config: &Config) -> Result<RemoteOrchestrator> {
    let endpoint = config.orchestrator.endpoint.clone().with_context(|| {
        format!(
            "Swarm orchestrator endpoint not configured. Set [orchestrator] endpoint or {}",
            ORCHESTRATOR_URL_ENV
        )
    })?;
    RemoteOrchestrator::new(endpoint, Duration::from_secs(config.orchestrator.timeout_secs))
        .context("Failed to create orchestrator client")
}

fn print_agents(config: &Config) -> Result<()> {
    let swarm = build_swarm_configuration(&config.model)?;
    println!("ASL Swarm Agent - Configuration");
    println!("{}", "=".repeat(60));
    print!("{}", swarm.summary());
    println!("Model: {}", config.model.model_id);
    println!(
        "Routing: max_handoffs={} max_iterations={} window={} min_unique_agents={}",
        config.routing.max_handoffs,
        config.routing.max_iterations,
        config.routing.repetitive_handoff_detection_window,
        config.routing.repetitive_handoff_min_unique_agents,
    );
    println!("{}", "=".repeat(60));
    println!("Example questions:");
    for (i, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        println!("{}. {}", i + 1, question);
    }
    Ok(())
}

async fn ask(config: &Config, question: &str) -> Result<()> {
    let swarm = build_swarm_configuration(&config.model)?;
    println!("{}", "=".repeat(80));
    println!("ASL Swarm Agent - Local Testing");
    println!("{}", "=".repeat(80));
    print!("{}", swarm.summary());
    println!("{}", "-".repeat(80));
    println!("Question: {}", question);
    println!("{}", "-".repeat(80));

    let orchestrator = orchestrator(config)?;
    println!("Processing...");
    let response =
        harness::ask_coordinator(&config.model, config.routing, &orchestrator, question)
            .await
            .context("Error during local testing")?;

    println!("Response:");
    println!("{}", "-".repeat(80));
    println!("{}", response);
    println!("{}", "-".repeat(80));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,asl_swarm=debug")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load .env files (local first, then home directory)
    // Errors are ignored - files are optional
    let _ = dotenvy::from_filename(".env");
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".env"));
    }

    let args = Args::parse();

    let config = match args.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    }
    .with_env();

    match args.command {
        Command::Serve { listen } => {
            // Fail fast on a bad agent table before accepting traffic
            build_swarm_configuration(&config.model)?;
            let entrypoint = Entrypoint::new(
                config.model.clone(),
                config.routing,
                Arc::new(orchestrator(&config)?),
            );
            let listen = listen.unwrap_or_else(|| config.server.listen.clone());
            runtime::serve(&listen, entrypoint).await
        }
        Command::Agents => print_agents(&config),
        Command::Ask { question } => ask(&config, &question).await,
    }
}
