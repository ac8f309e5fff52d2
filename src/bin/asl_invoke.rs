//! Invoke the ASL agent with an OAuth bearer token
//!
//! ```text
//! asl-invoke --token $JWT --input "How do I sign hello?"
//! asl-invoke --token $JWT --input "What are Wh-questions?" --session SESSION_ID
//! ```

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asl_swarm::invoke::BearerClient;

/// Invoke ASL Agent with OAuth Bearer Token
#[derive(Parser, Debug)]
#[command(name = "asl-invoke")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Agent runtime endpoint URL
    #[arg(long, env = "AGENT_ENDPOINT_ARN")]
    endpoint: Option<String>,

    /// JWT bearer token for authentication
    #[arg(long)]
    token: String,

    /// Question or input for the agent
    #[arg(long)]
    input: String,

    /// Session ID for conversation continuity (optional)
    #[arg(long)]
    session: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // .env is read before parsing so clap's env fallback can see it
    let _ = dotenvy::from_filename(".env");

    let args = Args::parse();

    let Some(endpoint) = args.endpoint.filter(|e| !e.is_empty()) else {
        eprintln!("Error: Agent endpoint not provided. Use --endpoint or set AGENT_ENDPOINT_ARN in .env");
        std::process::exit(1);
    };

    let client = match BearerClient::new(endpoint, args.token) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let session_id = args
        .session
        .filter(|id| !id.is_empty())
        .unwrap_or_else(asl_swarm::session::new_session_id);

    println!("Session ID: {}", session_id);
    println!("Question: {}", args.input);
    println!("{}", "-".repeat(60));
    print!("Response: ");

    let result = client
        .invoke(&args.input, Some(&session_id), |chunk| {
            print!("{}", chunk);
            let _ = std::io::stdout().flush();
        })
        .await;

    if result.is_success() {
        println!();
        println!("{}", "-".repeat(60));
    } else if let Some(error) = &result.error {
        println!();
        eprintln!("Error: {}", error);
    }

    std::process::exit(result.exit_code());
}
