use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use vector_strategy::campaign::options::CHANNELS;
use vector_strategy::ui::widgets::ToggleOutcome;
use vector_strategy::{
    CampaignDraft, DraftField, Phase, Step, StrategyAgent, SubmissionError, ValidationError,
    WizardController, WizardError,
};

/// Agent double that records every draft it receives.
struct RecordingAgent {
    calls: AtomicUsize,
    seen: Mutex<Vec<CampaignDraft>>,
    reply: fn() -> Result<Value, SubmissionError>,
}

impl RecordingAgent {
    fn replying(reply: fn() -> Result<Value, SubmissionError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            reply,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StrategyAgent for RecordingAgent {
    async fn run(&self, draft: &CampaignDraft) -> Result<Value, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(draft.clone());
        (self.reply)()
    }
}

fn filled_to_last_step() -> WizardController {
    let mut wizard = WizardController::new(CampaignDraft::default(), 3);
    for (field, value) in [
        (DraftField::BusinessIndustry, "Cybersecurity"),
        (DraftField::BusinessModel, "B2B"),
        (DraftField::OfferType, "SaaS Subscription"),
        (DraftField::OfferDescription, "SOC 2 readiness platform"),
        (DraftField::AudiencePersona, "CFOs at mid-market SaaS"),
        (DraftField::AudienceGeo, "North America"),
        (DraftField::Objective, "Lead Generation"),
    ] {
        wizard.set_field(field, value).unwrap();
    }
    while !wizard.is_last_step() {
        wizard.advance().unwrap();
    }
    wizard
}

#[tokio::test]
async fn completed_wizard_submits_exactly_once() {
    let agent = RecordingAgent::replying(|| {
        Ok(json!({"output": {"campaign_strategy": {"overview": "Lead with compliance speed"}}}))
    });
    let mut wizard = filled_to_last_step();
    wizard.toggle_channel(CHANNELS[0]).unwrap();

    let outcome = wizard.submit(&agent).await.unwrap();
    assert!(outcome.normalized.is_structured());
    assert_eq!(agent.calls(), 1);
    assert_eq!(agent.seen.lock().unwrap()[0].channels, [CHANNELS[0]]);

    let again = wizard.submit(&agent).await;
    assert!(matches!(again, Err(WizardError::AlreadyComplete)));
    assert_eq!(agent.calls(), 1);
    assert!(matches!(wizard.phase(), Phase::Complete(_)));
}

#[tokio::test]
async fn invalid_step_never_reaches_the_agent() {
    let agent = RecordingAgent::replying(|| Ok(json!({})));
    let mut wizard = filled_to_last_step();
    wizard.set_field(DraftField::Objective, " ").unwrap();

    let err = wizard.submit(&agent).await.unwrap_err();
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::MissingFields { step: Step::ExecutionStrategy, .. })
    ));
    assert_eq!(agent.calls(), 0);
    assert_eq!(wizard.step(), Step::ExecutionStrategy);
    assert_eq!(wizard.phase(), &Phase::Editing);
}

#[tokio::test]
async fn service_failure_keeps_the_form_for_a_retry() {
    let failing = RecordingAgent::replying(|| {
        Err(SubmissionError::Service {
            status: 502,
            body: "bad gateway".into(),
        })
    });
    let mut wizard = filled_to_last_step();

    let err = wizard.submit(&failing).await.unwrap_err();
    assert!(matches!(err, WizardError::Submission(SubmissionError::Service { status: 502, .. })));
    assert_eq!(wizard.step(), Step::ExecutionStrategy);
    assert_eq!(wizard.draft().business_industry, "Cybersecurity");

    let working = RecordingAgent::replying(|| Ok(json!("A plain-text plan")));
    let outcome = wizard.submit(&working).await.unwrap();
    assert!(!outcome.normalized.is_structured());
    assert_eq!(outcome.normalized.text, "A plain-text plan");
}

#[test]
fn second_submission_while_in_flight_is_busy() {
    let mut wizard = filled_to_last_step();
    let snapshot = wizard.begin_submission().unwrap();
    assert_eq!(snapshot.audience_geo, "North America");

    assert!(matches!(wizard.begin_submission(), Err(WizardError::Busy)));
    assert!(matches!(
        wizard.set_field(DraftField::BrandTone, "Bold"),
        Err(WizardError::Busy)
    ));
    assert!(wizard.is_submitting());
}

#[test]
fn reset_after_completion_starts_a_new_campaign() {
    let mut wizard = filled_to_last_step();
    wizard.begin_submission().unwrap();
    wizard.finish_submission(Ok(json!({"result": {"timeline": {}}}))).unwrap();

    wizard.reset();
    assert_eq!(wizard.phase(), &Phase::Editing);
    assert_eq!(wizard.step(), Step::FIRST);
    assert!(wizard.draft().business_industry.is_empty());
    assert!(wizard.outcome().is_none());
}

#[test]
fn seeded_channels_outside_the_catalog_survive_toggles() {
    let seed = CampaignDraft {
        channels: vec!["TikTok".into()],
        ..CampaignDraft::default()
    };
    let mut wizard = WizardController::new(seed, 3);

    wizard.toggle_channel("Email Marketing").unwrap();
    assert_eq!(wizard.draft().channels, ["TikTok", "Email Marketing"]);
}

#[test]
fn oversized_channel_cap_still_stops_at_three() {
    let mut wizard = WizardController::new(CampaignDraft::default(), 5);
    for channel in &CHANNELS[..3] {
        assert_eq!(wizard.toggle_channel(channel).unwrap(), ToggleOutcome::Selected);
    }
    assert_eq!(wizard.toggle_channel(CHANNELS[3]).unwrap(), ToggleOutcome::AtCapacity);
    assert_eq!(wizard.draft().channels.len(), 3);
}
