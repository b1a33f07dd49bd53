use serde_json::json;
use vector_strategy::config::AgentConfig;
use vector_strategy::{AgentClient, CampaignDraft, DraftField, StrategyReport, WizardController};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn wizard_submits_through_http_client_and_renders_report() {
    let server = MockServer::start().await;
    let reply = json!({
        "thread": {"posts": [{"content": "```json\n{\"campaign_strategy\":\"{\\\"overview\\\":\\\"Win on trust\\\",\\\"risks\\\":{\\\"risk_1\\\":\\\"Slow approvals\\\"}}\"}\n```"}]}
    });
    Mock::given(method("POST"))
        .and(path("/agents/run"))
        .and(header("authorization", "Bearer e2e-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(1)
        .mount(&server)
        .await;

    let client = AgentClient::new(&AgentConfig {
        endpoint: format!("{}/agents/run", server.uri()),
        api_key: Some("e2e-key".into()),
        timeout_secs: 5,
        ..AgentConfig::default()
    });

    let seed = CampaignDraft {
        business_industry: "Legal Tech".into(),
        business_model: "B2B".into(),
        offer_type: "Service".into(),
        offer_description: "Contract review".into(),
        audience_persona: "General counsel".into(),
        audience_geo: "UK".into(),
        objective: "Bookings".into(),
        ..CampaignDraft::default()
    };
    let mut wizard = WizardController::new(seed, 3);
    wizard.set_field(DraftField::MonthlyBudget, "£3,000").unwrap();
    while !wizard.is_last_step() {
        wizard.advance().unwrap();
    }

    let outcome = wizard.submit(&client).await.unwrap().clone();
    let report: StrategyReport = outcome.report().expect("structured report");
    assert_eq!(report.overview, "Win on trust");
    assert_eq!(report.risks[0].description, "Slow approvals");

    let markdown = outcome.to_markdown(wizard.draft());
    assert!(markdown.contains("## Executive Summary\nWin on trust"));
    assert!(markdown.contains("- Slow approvals\n  - _Mitigation:_ See general strategy."));
}
