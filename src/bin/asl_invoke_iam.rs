//! Invoke the ASL agent with IAM (SigV4) credentials
//!
//! ```text
//! asl-invoke-iam --input "How do I sign hello?"
//! asl-invoke-iam --input "Tell me about Deaf culture" --region us-west-2
//! ```

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asl_swarm::invoke::{invoke_with_iam, AgentCoreInvoker, DEFAULT_REGION};

/// Invoke ASL Agent with IAM (SigV4) Authentication
#[derive(Parser, Debug)]
#[command(name = "asl-invoke-iam")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Agent runtime ARN
    #[arg(long, env = "AGENT_RUNTIME_ARN")]
    arn: Option<String>,

    /// Question or input for the agent
    #[arg(long)]
    input: String,

    /// Session ID for conversation continuity (optional)
    #[arg(long)]
    session: Option<String>,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let _ = dotenvy::from_filename(".env");

    let args = Args::parse();

    let Some(arn) = args.arn.filter(|a| !a.is_empty()) else {
        eprintln!("Error: Agent runtime ARN not provided. Use --arn or set AGENT_RUNTIME_ARN in .env");
        std::process::exit(1);
    };

    let session_id = args
        .session
        .filter(|id| !id.is_empty())
        .unwrap_or_else(asl_swarm::session::new_session_id);

    println!("Session ID: {}", session_id);
    println!("Question: {}", args.input);
    println!("Region: {}", args.region);
    println!("{}", "-".repeat(60));

    let invoker = AgentCoreInvoker::new(&args.region).await;

    print!("Response: ");
    let result = invoke_with_iam(&invoker, &arn, &args.input, Some(&session_id), |chunk| {
        print!("{}", chunk);
        let _ = std::io::stdout().flush();
    })
    .await;

    if result.is_success() {
        println!();
        println!("{}", "-".repeat(60));
    } else {
        println!();
        if let Some(error) = &result.error {
            eprintln!("Error: {}", error);
        }
        if let Some(remediation) = &result.remediation {
            eprintln!();
            eprintln!("{}", remediation);
        }
    }

    std::process::exit(result.exit_code());
}
