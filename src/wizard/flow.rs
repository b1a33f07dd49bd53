use anyhow::{Context, Result};
use dialoguer::Select;

use crate::agent::StrategyAgent;
use crate::config::Config;
use crate::error::WizardError;
use crate::strategy::render::{export_markdown, fallback_markdown, print_markdown, print_report};
use crate::ui::style as ui;

use super::controller::{Outcome, WizardController};
use super::prompts::prompt_step;
use super::view::{
    print_banner, print_draft_summary, print_step, print_submission_error, print_submitting,
    print_success, print_validation_alert,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepAction {
    Continue,
    Generate,
    Back,
    Edit,
    Reset,
    Clear,
    Quit,
}

impl StepAction {
    fn label(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::Generate => "Generate strategy",
            Self::Back => "Back",
            Self::Edit => "Edit this step",
            Self::Reset => "Reset form",
            Self::Clear => "Clear all fields and restart",
            Self::Quit => "Quit",
        }
    }
}

fn step_actions(wizard: &WizardController) -> Vec<StepAction> {
    let mut actions = vec![if wizard.is_last_step() {
        StepAction::Generate
    } else {
        StepAction::Continue
    }];
    if wizard.step().number() > 1 {
        actions.push(StepAction::Back);
    }
    actions.extend([StepAction::Edit, StepAction::Reset, StepAction::Clear, StepAction::Quit]);
    actions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultAction {
    NewCampaign,
    SaveReport,
    Quit,
}

const RESULT_ACTIONS: [(ResultAction, &str); 3] = [
    (ResultAction::NewCampaign, "New campaign"),
    (ResultAction::SaveReport, "Save report (Markdown)"),
    (ResultAction::Quit, "Quit"),
];

fn choose<T: Copy>(prompt: &str, choices: &[(T, &str)]) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
    let idx = Select::new()
        .with_prompt(format!("  {prompt}"))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(choices[idx].0)
}

pub fn show_outcome(wizard: &WizardController, outcome: &Outcome) {
    let draft = wizard.draft();
    print_success(&draft.business_industry, &draft.objective);
    match outcome.report() {
        Some(report) => print_report(&report),
        None => print_markdown(&fallback_markdown(&outcome.normalized.text, draft)),
    }
}

/// Result screen. Returns `true` when the user wants another campaign.
fn result_screen(config: &Config, wizard: &WizardController) -> Result<bool> {
    let Some(outcome) = wizard.outcome() else {
        return Ok(true);
    };
    show_outcome(wizard, outcome);

    loop {
        match choose("What next?", &RESULT_ACTIONS)? {
            ResultAction::NewCampaign => return Ok(true),
            ResultAction::Quit => return Ok(false),
            ResultAction::SaveReport => {
                let markdown = outcome.to_markdown(wizard.draft());
                let path = export_markdown(&config.report.resolved_output_dir(), &markdown)
                    .context("Failed to save report")?;
                println!("  {} Report saved to {}", ui::success("✓"), ui::value(path.display()));
            }
        }
    }
}

/// Interactive wizard loop: four steps, one submission, then the result screen.
pub async fn run_wizard(config: &Config, agent: &dyn StrategyAgent) -> Result<()> {
    let mut wizard = WizardController::from_config(&config.wizard);
    print_banner();

    let mut prompt_fields = true;
    loop {
        if wizard.outcome().is_some() {
            if result_screen(config, &wizard)? {
                wizard.reset();
                prompt_fields = true;
                continue;
            }
            return Ok(());
        }

        if prompt_fields {
            print_step(wizard.step());
            prompt_step(&mut wizard)?;
        }
        prompt_fields = true;

        let actions = step_actions(&wizard);
        let choices: Vec<(StepAction, &str)> =
            actions.iter().map(|action| (*action, action.label())).collect();

        match choose("Next action", &choices)? {
            StepAction::Continue => {
                if let Err(err) = wizard.advance() {
                    report_wizard_error(err)?;
                }
            }
            StepAction::Generate => {
                print_draft_summary(wizard.draft());
                print_submitting();
                match wizard.submit(agent).await {
                    Ok(_) => {}
                    Err(WizardError::Submission(err)) => {
                        print_submission_error(&err);
                        prompt_fields = false;
                    }
                    Err(err) => report_wizard_error(err)?,
                }
            }
            StepAction::Back => {
                wizard.retreat()?;
            }
            StepAction::Edit => {}
            StepAction::Reset => wizard.reset(),
            StepAction::Clear => wizard.clear(),
            StepAction::Quit => return Ok(()),
        }
    }
}

/// Validation problems are shown and the step is re-prompted; anything else
/// ends the session.
fn report_wizard_error(err: WizardError) -> Result<()> {
    match err {
        WizardError::Validation(validation) => {
            print_validation_alert(&validation);
            Ok(())
        }
        other => Err(other.into()),
    }
}
