use serde_json::json;
use vector_strategy::strategy::render::{fallback_markdown, to_markdown};
use vector_strategy::strategy::report::ChannelKind;
use vector_strategy::strategy::shapes::{Risk, reconcile_risks};
use vector_strategy::{CampaignDraft, StrategyReport, normalize};

fn agent_payload() -> serde_json::Value {
    let strategy = json!({
        "campaign_strategy": {
            "overview": "Position the audit as the fastest route to SOC 2.",
            "core_message": "Compliance in weeks, not quarters",
            "funnel": {
                "top_funnel": "Thought leadership on LinkedIn",
                "middle_funnel": {"description": "Webinar with a live audit walkthrough"},
                "bottom_funnel": "Free readiness assessment"
            },
            "kpis": {
                "leading_indicators": "Webinar signups. Assessment requests",
                "lagging_indicators": ["SQLs", "Closed-won deals"]
            },
            "budget_allocation": {"paid_social": "$6,000", "search_ads": "$4,000"},
            "channel_strategy": {
                "paid_social": {
                    "strategy": "Retarget site visitors",
                    "targeting": "CFOs at 50-500 person SaaS",
                    "topics": ["Audit myths", "Cost of delay", "Case study", "Checklist"],
                    "kpis": "CTR, CPL",
                    "budget": "$6,000 per month"
                },
                "search_ads": "Bid on compliance-intent keywords"
            },
            "timeline": {
                "week_1": "Build audiences, Launch ads",
                "week_2": ["Host webinar"]
            },
            "risks": {
                "risk_1": "Long sales cycles",
                "mitigation_1": "Nurture with case studies",
                "risk_2": "Low webinar turnout"
            }
        },
        "validate_strategy": {
            "issue_count": 1,
            "summary": "Budget is concentrated on one channel.",
            "issues": [{
                "severity": "non_blocking",
                "type": "budget_balance",
                "evidence": "60% on paid social",
                "recommendation": "Test a 10% SEO allocation"
            }]
        }
    });
    let post = format!(
        "Here is your plan:\n```json\n{}\n```\nLet me know if you need changes.",
        serde_json::to_string_pretty(&strategy).unwrap()
    );
    json!({"thread": {"posts": [{"content": "Working on it..."}, {"content": post}]}})
}

fn report() -> StrategyReport {
    let normalized = normalize(&agent_payload());
    StrategyReport::from_normalized(normalized.structured.as_ref().expect("structured"))
}

#[test]
fn report_collects_every_section() {
    let report = report();

    assert_eq!(report.core_message, "Compliance in weeks, not quarters");
    assert_eq!(report.funnel.middle, "Webinar with a live audit walkthrough");
    assert_eq!(report.kpis.leading, ["Webinar signups.", "Assessment requests."]);
    assert_eq!(report.kpis.lagging, ["SQLs", "Closed-won deals"]);

    let panel = report.validation.as_ref().expect("validation panel");
    assert_eq!(panel.issues[0].severity, "non blocking");
    assert_eq!(panel.issues[0].kind, "Budget Balance");
    assert!(!panel.issues[0].blocking);

    let channels = report.channels.as_ref().expect("channels");
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].name, "Paid Social");
    assert_eq!(channels[0].detail.topics.len(), 3);
    assert_eq!(channels[0].badge(), Some("$6,000"));
    assert_eq!(channels[1].kind, ChannelKind::Search);
    assert_eq!(channels[1].detail.strategy.as_deref(), Some("Bid on compliance-intent keywords"));

    let timeline = report.timeline.as_ref().expect("timeline");
    assert_eq!(timeline[0].tasks, ["Build audiences", "Launch ads"]);
    assert_eq!(timeline[1].label, "Week 2");

    assert_eq!(
        report.risks,
        vec![
            Risk::new("Long sales cycles", Some("Nurture with case studies".into())),
            Risk::new("Low webinar turnout", Some("See general strategy.".into())),
        ]
    );
}

#[test]
fn markdown_report_is_printable() {
    let markdown = to_markdown(&report());
    assert!(markdown.contains("## Strategy Validation\nBudget is concentrated on one channel."));
    assert!(markdown.contains("- **[NON BLOCKING] Budget Balance**"));
    assert!(markdown.contains("Paid Social: **$6,000** | Search Ads: **$4,000**"));
    assert!(markdown.contains("- **Content Topics:** Audit myths · Cost of delay · Case study"));
    assert!(!markdown.contains("Checklist"));
    assert!(markdown.contains("### 1. Week 1\n- Build audiences\n- Launch ads\n"));
}

#[test]
fn risk_reconciliation_pairs_indexed_keys() {
    let risks = reconcile_risks(&json!({"risk_1": "Budget overrun", "mitigation_1": "Monitor weekly"}));
    assert_eq!(risks, vec![Risk::new("Budget overrun", Some("Monitor weekly".into()))]);
}

#[test]
fn unstructured_answer_renders_fallback_view() {
    let normalized = normalize(&json!({"output": "# Plan\n\n- Run webinars"}));
    assert!(!normalized.is_structured());

    let draft = CampaignDraft {
        business_industry: "Cybersecurity".into(),
        objective: "Bookings".into(),
        ..CampaignDraft::default()
    };
    let markdown = fallback_markdown(&normalized.text, &draft);
    assert!(markdown.starts_with("# Your Marketing Strategy\n"));
    assert!(markdown.contains("**Cybersecurity** targeting **Bookings**"));
    assert!(markdown.contains("# Plan\n\n- Run webinars"));
}
