use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::info;

use crate::agent::AgentClient;
use crate::campaign::options::DEFAULT_MAX_CHANNELS;
use crate::campaign::{CampaignDraft, DraftField};
use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::error::ValidationError;
use crate::strategy::render::{fallback_markdown, print_markdown, print_report};
use crate::ui::style as ui;
use crate::wizard::{Outcome, WizardController, run_wizard};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command_or_default() {
        Commands::Run => {
            let client = AgentClient::new(&config.agent);
            run_wizard(&config, &client).await
        }
        Commands::Submit { draft, markdown, raw } => {
            submit_draft(&config, &draft, markdown.as_deref(), raw.as_deref()).await
        }
        Commands::Render {
            input,
            draft,
            markdown,
        } => render_saved(&input, draft.as_deref(), markdown.as_deref()),
        Commands::Config => {
            print_config(&config);
            Ok(())
        }
    }
}

fn read_draft(path: &Path) -> Result<CampaignDraft> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse draft file: {}", path.display()))
}

fn write_markdown(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    println!("  {} Report saved to {}", ui::success("✓"), ui::value(path.display()));
    Ok(())
}

fn print_outcome(outcome: &Outcome, draft: &CampaignDraft) {
    match outcome.report() {
        Some(report) => print_report(&report),
        None => print_markdown(&fallback_markdown(&outcome.normalized.text, draft)),
    }
}

/// Walk a saved draft through every step, then submit it once.
async fn submit_draft(
    config: &Config,
    draft_path: &Path,
    markdown: Option<&Path>,
    raw_path: Option<&Path>,
) -> Result<()> {
    let draft = read_draft(draft_path)?;
    let max_channels = config.wizard.max_channels.min(DEFAULT_MAX_CHANNELS);
    if draft.channels.len() > max_channels {
        return Err(ValidationError::TooManySelections {
            field: DraftField::Channels,
            max: max_channels,
        }
        .into());
    }

    let mut wizard = WizardController::new(draft, max_channels);
    while !wizard.is_last_step() {
        wizard.advance()?;
    }

    let client = AgentClient::new(&config.agent);
    info!(endpoint = client.endpoint(), "submit.start");
    let outcome = wizard.submit(&client).await?.clone();

    print_outcome(&outcome, wizard.draft());
    if let Some(path) = raw_path {
        let raw = serde_json::to_string_pretty(&outcome.raw).context("Failed to encode response")?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write raw response: {}", path.display()))?;
    }
    if let Some(path) = markdown {
        write_markdown(path, &outcome.to_markdown(wizard.draft()))?;
    }
    Ok(())
}

/// Normalize and render a response saved earlier.
fn render_saved(input: &Path, draft: Option<&Path>, markdown: Option<&Path>) -> Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read response file: {}", input.display()))?;
    if contents.trim().is_empty() {
        bail!("Response file is empty: {}", input.display());
    }
    let raw = serde_json::from_str(&contents).unwrap_or(Value::String(contents));
    let draft = draft.map(read_draft).transpose()?.unwrap_or_default();

    let outcome = Outcome::from_raw(raw);
    print_outcome(&outcome, &draft);
    if let Some(path) = markdown {
        write_markdown(path, &outcome.to_markdown(&draft))?;
    }
    Ok(())
}

fn print_config(config: &Config) {
    println!();
    println!("  {}", ui::header("Vector configuration"));
    println!("    › Config file: {}", ui::value(config.config_path.display()));
    println!("    › Log level: {}", config.log_level);
    println!("    › Endpoint: {}", config.agent.endpoint);
    println!("    › Agent ID: {}", config.agent.agent_id);
    println!("    › Workflow: {}", config.agent.workflow);
    println!("    › API key: {}", config.agent.redacted_api_key());
    println!("    › Timeout: {}s", config.agent.timeout_secs);
    println!("    › Max channels: {}", config.wizard.max_channels);
    println!(
        "    › Report directory: {}",
        ui::value(config.report.resolved_output_dir().display())
    );
    println!();
}
