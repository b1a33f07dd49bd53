//! Typed view of a normalized strategy.
//!
//! Building the report applies every tolerant shape rule once, so the
//! terminal and Markdown renderers only deal with plain strings and lists.

use serde_json::{Map, Value};

use super::json::{is_truthy, lookup, truthy_field};
use super::normalize::NormalizedStrategy;
use super::shapes::{
    ChannelDetail, Risk, budget_badge, channel_detail, content_text, field_text, humanize_key,
    reconcile_risks, text_list,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: String,
    pub kind: String,
    pub evidence: String,
    pub recommendation: String,
    pub blocking: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPanel {
    pub summary: String,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Funnel {
    pub top: String,
    pub middle: String,
    pub bottom: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kpis {
    pub leading: Vec<String>,
    pub lagging: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetLine {
    pub label: String,
    pub amount: String,
}

/// Broad channel family, used to pick a marker for each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Social,
    Search,
    Email,
    Influencer,
    Content,
    Other,
}

impl ChannelKind {
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("social") {
            Self::Social
        } else if name.contains("search") || name.contains("seo") {
            Self::Search
        } else if name.contains("email") {
            Self::Email
        } else if name.contains("influencer") {
            Self::Influencer
        } else if name.contains("content") {
            Self::Content
        } else {
            Self::Other
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Social => "[social]",
            Self::Search => "[search]",
            Self::Email => "[email]",
            Self::Influencer => "[influencer]",
            Self::Content => "[content]",
            Self::Other => "[channel]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCard {
    pub name: String,
    pub kind: ChannelKind,
    pub detail: ChannelDetail,
}

impl ChannelCard {
    fn new(name: String, value: &Value) -> Self {
        Self {
            kind: ChannelKind::from_name(&name),
            detail: channel_detail(value),
            name,
        }
    }

    /// Budget as shown on the card header.
    pub fn badge(&self) -> Option<&str> {
        self.detail.budget.as_deref().map(budget_badge)
    }

    /// Success metrics on one line.
    pub fn kpi_line(&self) -> Option<String> {
        (!self.detail.kpis.is_empty()).then(|| self.detail.kpis.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePhase {
    pub number: usize,
    pub label: String,
    pub tasks: Vec<String>,
}

/// A strategy ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    pub overview: String,
    pub core_message: String,
    pub validation: Option<ValidationPanel>,
    pub funnel: Funnel,
    pub kpis: Kpis,
    /// Shown alongside the channel cards; empty when the section is absent.
    pub budget_allocation: Vec<BudgetLine>,
    pub channels: Option<Vec<ChannelCard>>,
    pub timeline: Option<Vec<TimelinePhase>>,
    pub risks: Vec<Risk>,
}

/// Display label for a snake_case value: first `_` to a space.
fn label(text: &str) -> String {
    text.replacen('_', " ", 1)
}

/// Numeric reading of `issue_count`, accepting numbers, numeric strings and
/// booleans.
fn issue_count(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        _ => 0.0,
    }
}

fn validation_issue(issue: &Value) -> ValidationIssue {
    let severity = truthy_field(issue, "severity").map(content_text);
    let blocking = matches!(issue.get("severity"), Some(Value::String(s)) if s == "blocking");
    ValidationIssue {
        severity: severity.map_or_else(|| "Issue".to_string(), |s| label(&s)),
        kind: truthy_field(issue, "type")
            .map(content_text)
            .map_or_else(|| "Optimization".to_string(), |kind| humanize_key(&kind)),
        evidence: field_text(issue, "evidence"),
        recommendation: field_text(issue, "recommendation"),
        blocking,
    }
}

fn validation_panel(validate: Option<&Value>) -> Option<ValidationPanel> {
    let validate = validate.filter(|value| is_truthy(value))?;
    if issue_count(validate.get("issue_count")) <= 0.0 {
        return None;
    }

    let issues = match truthy_field(validate, "issues") {
        Some(Value::Array(items)) => items.iter().map(validation_issue).collect(),
        Some(item @ Value::Object(_)) => vec![validation_issue(item)],
        _ => Vec::new(),
    };

    Some(ValidationPanel {
        summary: field_text(validate, "summary"),
        issues,
    })
}

fn channel_cards(value: &Value) -> Vec<ChannelCard> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(name, detail)| ChannelCard::new(humanize_key(name), detail))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let name = ["channel", "name"]
                    .iter()
                    .find_map(|key| truthy_field(item, key))
                    .map_or_else(|| format!("Channel {}", idx + 1), content_text);
                ChannelCard::new(humanize_key(&name), item)
            })
            .collect(),
        other => vec![ChannelCard::new("Channel Strategy".to_string(), other)],
    }
}

fn timeline_phases(value: &Value) -> Vec<TimelinePhase> {
    let phase = |idx: usize, label: String, tasks: &Value| TimelinePhase {
        number: idx + 1,
        label,
        tasks: text_list(tasks),
    };

    match value {
        Value::Object(map) => map
            .iter()
            .enumerate()
            .map(|(idx, (key, tasks))| phase(idx, humanize_key(key), tasks))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, tasks)| phase(idx, format!("Phase {}", idx + 1), tasks))
            .collect(),
        other => vec![phase(0, "Timeline".to_string(), other)],
    }
}

fn budget_lines(value: Option<&Value>) -> Vec<BudgetLine> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, amount)| BudgetLine {
                label: humanize_key(key),
                amount: content_text(amount),
            })
            .collect(),
        Some(other) if is_truthy(other) => vec![BudgetLine {
            label: "Budget".to_string(),
            amount: content_text(other),
        }],
        _ => Vec::new(),
    }
}

impl StrategyReport {
    pub fn from_normalized(strategy: &NormalizedStrategy) -> Self {
        Self::build(
            &strategy.campaign_strategy,
            strategy.validate_strategy.as_ref(),
        )
    }

    pub fn build(campaign: &Map<String, Value>, validate: Option<&Value>) -> Self {
        let root = Value::Object(campaign.clone());
        let text_at = |path: &[&str]| lookup(&root, path).map(content_text).unwrap_or_default();
        let list_at = |path: &[&str]| lookup(&root, path).map(text_list).unwrap_or_default();

        Self {
            overview: text_at(&["overview"]),
            core_message: text_at(&["core_message"]),
            validation: validation_panel(validate),
            funnel: Funnel {
                top: text_at(&["funnel", "top_funnel"]),
                middle: text_at(&["funnel", "middle_funnel"]),
                bottom: text_at(&["funnel", "bottom_funnel"]),
            },
            kpis: Kpis {
                leading: list_at(&["kpis", "leading_indicators"]),
                lagging: list_at(&["kpis", "lagging_indicators"]),
            },
            budget_allocation: budget_lines(campaign.get("budget_allocation")),
            channels: truthy_field(&root, "channel_strategy").map(channel_cards),
            timeline: truthy_field(&root, "timeline").map(timeline_phases),
            risks: campaign.get("risks").map(reconcile_risks).unwrap_or_default(),
        }
    }
}
