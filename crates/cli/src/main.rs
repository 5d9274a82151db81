use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod auth;
mod config;
mod orchestrator;
mod prompts;
mod session;
mod ui;

use auth::BasicAuthenticator;
use orchestrator::SetupFlow;
use prompts::ConsolePrompt;

/// Bootstrap a CTF competition repository on GitHub.
///
/// The flow is entirely prompt-driven: resource folder, credentials, resume
/// stage, then repository, label, and project-board setup.
#[derive(Parser)]
#[command(name = "ctf-setup", version, about = "CTF repository bootstrapper")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("ctf_setup=debug,github=debug,info")
    } else {
        EnvFilter::new("ctf_setup=info,github=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    ui::print_banner();

    let flow = SetupFlow::new(ConsolePrompt::new(), BasicAuthenticator);
    flow.run().await
}
