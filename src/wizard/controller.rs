//! Wizard state machine: draft, active step and submission phase.
//!
//! The controller owns the draft exclusively. Renderers and the normalizer
//! only ever see borrowed snapshots of it.

use serde_json::Value;
use tracing::{info, warn};

use crate::agent::StrategyAgent;
use crate::campaign::options::{CHANNELS, DEFAULT_MAX_CHANNELS};
use crate::campaign::{CampaignDraft, DraftField, Step};
use crate::config::WizardConfig;
use crate::error::{SubmissionError, WizardError};
use crate::strategy::render::{fallback_markdown, to_markdown};
use crate::strategy::{Normalized, StrategyReport, normalize};
use crate::ui::widgets::{ChipGroup, ToggleOutcome};

/// Direction of the most recent step transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// A completed submission: what the agent sent and what we made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub raw: Value,
    pub normalized: Normalized,
}

impl Outcome {
    pub fn from_raw(raw: Value) -> Self {
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    pub fn report(&self) -> Option<StrategyReport> {
        self.normalized
            .structured
            .as_ref()
            .map(StrategyReport::from_normalized)
    }

    /// Printable report: the structured rendition when there is one,
    /// otherwise the raw text with a display note.
    pub fn to_markdown(&self, draft: &CampaignDraft) -> String {
        match self.report() {
            Some(report) => to_markdown(&report),
            None => fallback_markdown(&self.normalized.text, draft),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing,
    /// A request is in flight; navigation and edits are refused.
    Submitting,
    Complete(Box<Outcome>),
}

#[derive(Debug, Clone)]
pub struct WizardController {
    draft: CampaignDraft,
    seed: CampaignDraft,
    step: Step,
    direction: Direction,
    phase: Phase,
    max_channels: usize,
}

impl WizardController {
    /// Start a wizard whose drafts are pre-filled from `seed`. The channel
    /// cap never exceeds [`DEFAULT_MAX_CHANNELS`].
    pub fn new(seed: CampaignDraft, max_channels: usize) -> Self {
        let max_channels = max_channels.min(DEFAULT_MAX_CHANNELS);
        let mut draft = CampaignDraft::default();
        draft.merge_from(&seed);
        draft.channels.truncate(max_channels);
        Self {
            draft,
            seed,
            step: Step::FIRST,
            direction: Direction::Next,
            phase: Phase::Editing,
            max_channels,
        }
    }

    pub fn from_config(config: &WizardConfig) -> Self {
        Self::new(config.defaults.clone(), config.max_channels)
    }

    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn max_channels(&self) -> usize {
        self.max_channels
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn is_last_step(&self) -> bool {
        self.step == Step::LAST
    }

    /// `(current, total)` step numbers.
    pub fn progress(&self) -> (u8, u8) {
        (self.step.number(), Step::total())
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Complete(outcome) => Some(outcome),
            Phase::Editing | Phase::Submitting => None,
        }
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        match self.phase {
            Phase::Editing => Ok(()),
            Phase::Submitting => Err(WizardError::Busy),
            Phase::Complete(_) => Err(WizardError::AlreadyComplete),
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editing()?;
        self.draft.set(field, value);
        Ok(())
    }

    pub fn set_channels(&mut self, channels: Vec<String>) -> Result<(), WizardError> {
        self.ensure_editing()?;
        self.draft.set_channels(channels, self.max_channels)?;
        Ok(())
    }

    /// Toggle one channel, honoring the selection cap. Other selections,
    /// including ones outside [`CHANNELS`], are left as they are.
    pub fn toggle_channel(&mut self, channel: &str) -> Result<ToggleOutcome, WizardError> {
        self.ensure_editing()?;
        let mut group = self.channel_group();
        let outcome = group.toggle(channel);
        self.draft.channels = group.into_selected();
        Ok(outcome)
    }

    /// Chip group over the known channels, seeded with the current selection.
    pub fn channel_group(&self) -> ChipGroup {
        ChipGroup::new(CHANNELS.iter().copied(), self.max_channels).with_selected(&self.draft.channels)
    }

    /// Validate the active step and move forward, capped at the last step.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        self.ensure_editing()?;
        if let Err(err) = self.step.validate(&self.draft) {
            warn!(step = %self.step, error = %err, "wizard.advance.blocked");
            return Err(err.into());
        }
        self.step = self.step.next();
        self.direction = Direction::Next;
        info!(step = %self.step, "wizard.advance");
        Ok(self.step)
    }

    /// Move back one step, floored at the first. Never validates.
    pub fn retreat(&mut self) -> Result<Step, WizardError> {
        self.ensure_editing()?;
        self.step = self.step.prev();
        self.direction = Direction::Prev;
        info!(step = %self.step, "wizard.retreat");
        Ok(self.step)
    }

    /// Validate the active step and enter [`Phase::Submitting`], returning
    /// the draft snapshot to send.
    pub fn begin_submission(&mut self) -> Result<CampaignDraft, WizardError> {
        self.ensure_editing()?;
        if let Err(err) = self.step.validate(&self.draft) {
            warn!(step = %self.step, error = %err, "wizard.submit.blocked");
            return Err(err.into());
        }
        self.phase = Phase::Submitting;
        info!(step = %self.step, "wizard.submit");
        Ok(self.draft.clone())
    }

    /// Settle an in-flight submission. Success completes the wizard; failure
    /// returns to editing on the same step with the draft intact.
    pub fn finish_submission(
        &mut self,
        result: Result<Value, SubmissionError>,
    ) -> Result<&Outcome, WizardError> {
        if !self.is_submitting() {
            return Err(self.ensure_editing().err().unwrap_or(WizardError::NotSubmitting));
        }

        match result {
            Ok(raw) => {
                let outcome = Outcome::from_raw(raw);
                info!(
                    structured = outcome.normalized.is_structured(),
                    "wizard.submit.complete"
                );
                self.phase = Phase::Complete(Box::new(outcome));
                self.outcome().ok_or(WizardError::NotSubmitting)
            }
            Err(err) => {
                warn!(step = %self.step, error = %err, "wizard.submit.failed");
                self.phase = Phase::Editing;
                Err(err.into())
            }
        }
    }

    /// Abandon an in-flight submission without a result.
    pub fn cancel_submission(&mut self) {
        if self.is_submitting() {
            info!("wizard.submit.cancelled");
            self.phase = Phase::Editing;
        }
    }

    /// Validate, send the draft through `agent`, and settle the result.
    pub async fn submit(&mut self, agent: &dyn StrategyAgent) -> Result<&Outcome, WizardError> {
        let snapshot = self.begin_submission()?;
        let result = agent.run(&snapshot).await;
        self.finish_submission(result)
    }

    /// Start over from step 1 with a freshly seeded draft.
    pub fn reset(&mut self) {
        let mut draft = CampaignDraft::default();
        draft.merge_from(&self.seed);
        draft.channels.truncate(self.max_channels);
        self.replace(draft);
        info!("wizard.reset");
    }

    /// Start over from step 1 with every field empty.
    pub fn clear(&mut self) {
        self.replace(CampaignDraft::default());
        info!("wizard.clear");
    }

    fn replace(&mut self, draft: CampaignDraft) {
        self.draft = draft;
        self.step = Step::FIRST;
        self.direction = Direction::Next;
        self.phase = Phase::Editing;
    }
}
