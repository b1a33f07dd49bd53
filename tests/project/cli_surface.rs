use std::fs;

use clap::Parser;
use serde_json::{Value, json};
use vector_strategy::app::dispatch;
use vector_strategy::cli::commands::Cli;
use vector_strategy::config::Config;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETE_DRAFT: &str = r#"{
    "business_industry": "Healthcare",
    "business_model": "B2B",
    "offer_type": "Software",
    "offer_description": "Patient intake automation",
    "audience_persona": "Clinic operations managers",
    "audience_geo": "US",
    "objective": "Demo requests",
    "channels": ["Search Ads"]
}"#;

#[tokio::test]
async fn submit_command_writes_raw_response_and_report() {
    let server = MockServer::start().await;
    let reply = json!({"result": {"campaign_strategy": {"overview": "Target intake pain"}}});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let draft = dir.path().join("draft.json");
    let raw = dir.path().join("raw.json");
    let report = dir.path().join("report.md");
    fs::write(&draft, COMPLETE_DRAFT).unwrap();

    let mut config = Config::default();
    config.agent.endpoint = format!("{}/run", server.uri());
    config.agent.api_key = Some("cli-key".into());

    let cli = Cli::try_parse_from([
        "vector",
        "submit",
        "--draft",
        draft.to_str().unwrap(),
        "--raw",
        raw.to_str().unwrap(),
        "--markdown",
        report.to_str().unwrap(),
    ])
    .unwrap();
    dispatch(cli, config).await.unwrap();

    let saved: Value = serde_json::from_str(&fs::read_to_string(raw).unwrap()).unwrap();
    assert_eq!(saved, reply);
    assert!(fs::read_to_string(report).unwrap().contains("Target intake pain"));
}

#[tokio::test]
async fn submit_command_without_credential_fails() {
    let dir = tempfile::tempdir().unwrap();
    let draft = dir.path().join("draft.json");
    fs::write(&draft, COMPLETE_DRAFT).unwrap();

    let mut config = Config::default();
    config.agent.endpoint = "http://127.0.0.1:9/run".into();

    let cli = Cli::try_parse_from(["vector", "submit", "--draft", draft.to_str().unwrap()]).unwrap();
    let err = dispatch(cli, config).await.unwrap_err();
    assert!(err.to_string().to_lowercase().contains("api key"));
}

#[tokio::test]
async fn render_command_uses_draft_for_plain_text_view() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("answer.txt");
    let draft = dir.path().join("draft.json");
    let report = dir.path().join("report.md");
    fs::write(&input, "Run a webinar series for clinic managers.").unwrap();
    fs::write(&draft, COMPLETE_DRAFT).unwrap();

    let cli = Cli::try_parse_from([
        "vector",
        "render",
        "--input",
        input.to_str().unwrap(),
        "--draft",
        draft.to_str().unwrap(),
        "--markdown",
        report.to_str().unwrap(),
    ])
    .unwrap();
    dispatch(cli, Config::default()).await.unwrap();

    let markdown = fs::read_to_string(report).unwrap();
    assert!(markdown.contains("**Healthcare** targeting **Demo requests**"));
    assert!(markdown.contains("Run a webinar series for clinic managers."));
}
