use vector_strategy::config::Config;
use vector_strategy::config::schema::{DEFAULT_AGENT_ID, DEFAULT_ENDPOINT};

#[test]
fn minimal_config_deserializes_with_defaults() {
    let toml = r#"
log_level = "info"

[agent]
timeout_secs = 30
"#;

    let parsed: Config = toml::from_str(toml).expect("minimal config should deserialize");

    assert_eq!(parsed.tracing_level(), tracing::Level::INFO);
    assert_eq!(parsed.agent.timeout_secs, 30);
    assert_eq!(parsed.agent.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(parsed.agent.agent_id, DEFAULT_AGENT_ID);
    assert!(parsed.agent.api_key().is_none());
    assert_eq!(parsed.wizard.max_channels, 3);
    assert_eq!(parsed.report.output_dir, ".");
    assert!(parsed.validate().is_ok());
}

#[test]
fn wizard_defaults_seed_partial_drafts() {
    let toml = r#"
[wizard]
max_channels = 2

[wizard.defaults]
business_model = "B2C"
audience_geo = "EU"
channels = ["Email Marketing"]
"#;

    let parsed: Config = toml::from_str(toml).expect("wizard defaults should deserialize");
    let defaults = &parsed.wizard.defaults;

    assert_eq!(defaults.business_model, "B2C");
    assert_eq!(defaults.audience_geo, "EU");
    assert_eq!(defaults.channels, ["Email Marketing"]);
    assert!(defaults.business_industry.is_empty());
    assert!(parsed.validate().is_ok());
}

#[test]
fn default_channels_over_the_cap_are_rejected() {
    let toml = r#"
[wizard]
max_channels = 1

[wizard.defaults]
channels = ["Paid Social", "Search Ads"]
"#;

    let parsed: Config = toml::from_str(toml).expect("config should deserialize");
    let err = parsed.validate().unwrap_err();
    assert!(err.to_string().contains("max_channels"));
}

#[test]
fn channel_cap_above_three_is_rejected() {
    let parsed: Config = toml::from_str("[wizard]\nmax_channels = 5\n").expect("config should deserialize");
    let err = parsed.validate().unwrap_err();
    assert!(err.to_string().contains("wizard.max_channels"));
    assert!(err.to_string().contains("between 1 and 3"));
}

#[test]
fn blank_api_key_counts_as_unset() {
    let parsed: Config = toml::from_str("[agent]\napi_key = \"   \"\n").expect("config should deserialize");
    assert!(parsed.agent.api_key().is_none());
    assert_eq!(parsed.agent.redacted_api_key(), "(not set)");
}
