use serde_json::{Value, json};
use vector_strategy::strategy::shapes::text_list;
use vector_strategy::strategy::{Classification, classify, normalize};

fn campaign_of(raw: &Value) -> Value {
    let normalized = normalize(raw);
    let strategy = normalized.structured.expect("expected a structured strategy");
    Value::Object(strategy.campaign_strategy)
}

#[test]
fn fenced_json_in_output_is_structured() {
    let raw = json!({"output": "```json\n{\"overview\":\"x\",\"funnel\":{}}\n```"});
    assert_eq!(campaign_of(&raw), json!({"overview": "x", "funnel": {}}));
}

#[test]
fn conversational_thread_post_is_mined_for_json() {
    let raw = json!({"thread": {"posts": [
        {"content": "Some text {\"kpis\":{\"leading_indicators\":\"a, b, c\"}} trailing"}
    ]}});
    let campaign = campaign_of(&raw);
    assert_eq!(
        text_list(&campaign["kpis"]["leading_indicators"]),
        vec!["a", "b", "c"]
    );
}

#[test]
fn feeding_a_normalized_strategy_back_is_idempotent() {
    let raw = json!({"variables": {
        "campaign_strategy": "{\"overview\":\"Lead with proof\",\"kpis\":{\"lagging_indicators\":[\"CAC\"]}}",
        "validate_strategy": {"issue_count": 1, "summary": "One gap"}
    }});
    let first = normalize(&raw).structured.unwrap();
    let second = normalize(&json!({"result": first.to_value()})).structured.unwrap();
    assert_eq!(first, second);
    assert_eq!(second.validate_strategy.unwrap()["summary"], "One gap");
}

#[test]
fn unrecognized_payload_falls_back_to_pretty_json() {
    let raw = json!({"status": "done", "thread": {"id": 7}});
    let normalized = normalize(&raw);
    assert!(normalized.structured.is_none());
    assert_eq!(normalized.text, serde_json::to_string_pretty(&raw).unwrap());
}

#[test]
fn plain_text_answer_becomes_fallback_text() {
    let raw = json!({"thread": {"posts": [
        {"content": "Hi!"},
        {"content": "## Strategy\n\nFocus on webinars for CFOs."}
    ]}});
    let normalized = normalize(&raw);
    assert!(normalized.structured.is_none());
    assert_eq!(normalized.text, "## Strategy\n\nFocus on webinars for CFOs.");
}

#[test]
fn classifier_distinguishes_bare_and_wrapped() {
    assert!(matches!(classify(&json!({"timeline": {}})), Classification::Bare(_)));
    assert!(matches!(
        classify(&json!({"campaign_strategy": {"overview": "o"}})),
        Classification::Wrapped { .. }
    ));
    assert!(matches!(classify(&json!({"campaign_strategy": null})), Classification::Unrecognized));
    assert!(matches!(classify(&json!(["overview"])), Classification::Unrecognized));
}
