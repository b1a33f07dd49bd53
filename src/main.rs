use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use vector_strategy::Config;
use vector_strategy::app::dispatch;
use vector_strategy::cli::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_init()?;
    config.apply_env_overrides();
    config.validate().context("Invalid configuration")?;

    // Logs go to stderr so they never interleave with wizard prompts on stdout.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    dispatch(cli, config).await
}
