//! PromptCraft CLI binary.
//!
//! This binary provides command-line access to PromptCraft:
//! - Generate prompt variants from an idea
//! - Expand an idea into a single prompt
//! - Describe an image as a prompt
//! - List and clear local history

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, execute};

    // Pick up GROQ_API_KEY from .env before configuration loads
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout carries only prompts
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Failures are reported as one line, without log decoration
    if let Err(e) = execute(cli.command).await {
        tracing::debug!(error = %e, "Command failed");
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}
