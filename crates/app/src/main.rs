//! Quizgen - Main Entry Point
//!
//! Parses arguments, initializes logging, loads configuration and runs the
//! requested command on the console.

use clap::Parser;
use quizgen::cli::Cli;
use quizgen_infrastructure::AppConfig;
use quizgen_ui::StdTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with page output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizgen=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting quizgen");

    let ctx = quizgen::build_context(&config, cli.ephemeral).await?;
    let mut term = StdTerminal::new();
    quizgen::commands::execute(cli.command.unwrap_or_default(), &ctx, &mut term).await
}
