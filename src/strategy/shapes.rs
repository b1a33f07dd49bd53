//! Total normalization functions for the loosely-typed strategy sections.
//!
//! Each function accepts any JSON value and returns a canonical form; none of
//! them fail.

use serde::Serialize;
use serde_json::{Map, Value};

use super::json::{is_truthy, truthy_field};

/// Mitigation shown for `risk_N` entries that have no `mitigation_N` sibling.
pub const DEFAULT_MITIGATION: &str = "See general strategy.";

/// Topics shown per channel card.
pub const MAX_CHANNEL_TOPICS: usize = 3;

/// Render a scalar-or-nested value as display text.
///
/// Strings and numbers render directly. Objects prefer `description`, then
/// `text`, then `name`, else their compact JSON. Arrays render as JSON;
/// booleans and null render empty.
pub fn content_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Object(_) => ["description", "text", "name"]
            .iter()
            .find_map(|key| truthy_field(value, key))
            .map_or_else(|| value.to_string(), content_text),
        Value::Array(_) => value.to_string(),
        Value::Bool(_) | Value::Null => String::new(),
    }
}

/// `content_text` of an optional field, empty when absent.
pub fn field_text(value: &Value, key: &str) -> String {
    value.get(key).map(content_text).unwrap_or_default()
}

/// Coerce a list-shaped value into a list.
///
/// Arrays pass through. Strings containing `". "` split into sentences (each
/// trimmed, blanks dropped, terminated with a period); otherwise strings
/// containing `,` split on commas; otherwise a string is a single item. Other
/// present values become a single item, absent ones an empty list.
pub fn ensure_list(value: &Value) -> Vec<Value> {
    if !is_truthy(value) {
        return Vec::new();
    }

    match value {
        Value::Array(items) => items.clone(),
        Value::String(text) if text.contains(". ") => text
            .split(". ")
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| {
                if sentence.ends_with('.') {
                    Value::String(sentence.to_string())
                } else {
                    Value::String(format!("{sentence}."))
                }
            })
            .collect(),
        Value::String(text) if text.contains(',') => text
            .split(',')
            .map(|piece| Value::String(piece.trim().to_string()))
            .collect(),
        other => vec![other.clone()],
    }
}

/// [`ensure_list`] rendered through [`content_text`].
pub fn text_list(value: &Value) -> Vec<String> {
    ensure_list(value).iter().map(content_text).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Risk {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

impl Risk {
    pub fn new(description: impl Into<String>, mitigation: Option<String>) -> Self {
        Self {
            description: description.into(),
            mitigation: mitigation.filter(|text| !text.is_empty()),
        }
    }
}

fn risk_from_item(item: &Value) -> Risk {
    match item {
        Value::Object(_) => Risk::new(
            field_text(item, "description"),
            truthy_field(item, "mitigation").map(content_text),
        ),
        other => Risk::new(content_text(other), None),
    }
}

/// Index `N` of a `risk_N` key.
fn risk_index(key: &str) -> Option<&str> {
    let rest = key.strip_prefix("risk_")?;
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(pos, _)| pos);
    (end > 0).then(|| &rest[..end])
}

fn indexed_risks(map: &Map<String, Value>) -> Vec<Risk> {
    map.iter()
        .filter_map(|(key, value)| {
            let index = risk_index(key)?;
            let paired = map
                .get(&format!("mitigation_{index}"))
                .filter(|mitigation| is_truthy(mitigation));

            let risk = if value.is_object() || value.is_array() {
                let description = ["description", "text"]
                    .iter()
                    .find_map(|field| truthy_field(value, field))
                    .map_or_else(|| value.to_string(), content_text);
                let mitigation = truthy_field(value, "mitigation").or(paired).map(content_text);
                Risk::new(description, mitigation)
            } else {
                let mitigation = paired.map_or_else(|| DEFAULT_MITIGATION.to_string(), content_text);
                Risk::new(content_text(value), Some(mitigation))
            };
            Some(risk)
        })
        .collect()
}

/// Reconcile the three shapes `risks` arrives in: an array of risks, an
/// object of `risk_N` / `mitigation_N` pairs, or an object whose values are
/// risks.
pub fn reconcile_risks(value: &Value) -> Vec<Risk> {
    if !is_truthy(value) {
        return Vec::new();
    }

    match value {
        Value::Array(items) => items.iter().map(risk_from_item).collect(),
        Value::Object(map) if map.keys().any(|key| key.starts_with("risk_")) => indexed_risks(map),
        Value::Object(map) => map.values().map(risk_from_item).collect(),
        Value::String(_) => text_list(value)
            .into_iter()
            .map(|description| Risk::new(description, None))
            .collect(),
        Value::Number(_) | Value::Bool(_) | Value::Null => Vec::new(),
    }
}

/// A channel entry, normalized from either a detail object or a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelDetail {
    pub strategy: Option<String>,
    pub targeting: Option<String>,
    pub topics: Vec<String>,
    pub kpis: Vec<String>,
    pub budget: Option<String>,
}

pub fn channel_detail(value: &Value) -> ChannelDetail {
    match value {
        Value::String(text) => ChannelDetail {
            strategy: Some(text.clone()).filter(|text| !text.is_empty()),
            ..ChannelDetail::default()
        },
        Value::Object(_) => {
            let text_field = |key: &str| {
                truthy_field(value, key)
                    .map(content_text)
                    .filter(|text| !text.is_empty())
            };
            ChannelDetail {
                strategy: text_field("strategy"),
                targeting: text_field("targeting"),
                topics: truthy_field(value, "topics")
                    .map(|topics| {
                        let mut list = text_list(topics);
                        list.truncate(MAX_CHANNEL_TOPICS);
                        list
                    })
                    .unwrap_or_default(),
                kpis: truthy_field(value, "kpis").map(text_list).unwrap_or_default(),
                budget: text_field("budget"),
            }
        }
        _ => ChannelDetail::default(),
    }
}

/// Compact budget badge: a figure with a `$` is cut at its first space.
pub fn budget_badge(budget: &str) -> &str {
    if budget.contains('$') {
        budget.split(' ').next().unwrap_or(budget)
    } else {
        budget
    }
}

/// Display form of a snake_case key: the first `_` becomes a space and each
/// word is capitalized.
pub fn humanize_key(key: &str) -> String {
    capitalize_words(&key.replacen('_', " ", 1))
}

pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
