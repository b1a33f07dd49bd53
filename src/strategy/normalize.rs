//! Turn whatever the agent returned into something the report can render.
//!
//! The agent's response shape is not stable: the strategy may arrive as an
//! object, wrapped under `campaign_strategy`, JSON-encoded inside a string,
//! fenced in Markdown, or buried in conversational text inside a thread post.
//! [`normalize`] walks a fixed list of candidate locations and stops at the
//! first one that resolves to a strategy.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::classify::{Classification, classify};
use super::json::{is_truthy, lookup, parse_embedded_json, truthy_field};

/// A strategy whose `campaign_strategy` is known to carry strategy sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStrategy {
    pub campaign_strategy: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_strategy: Option<Value>,
}

impl NormalizedStrategy {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Outcome of normalization: a structured strategy when one was found, plus
/// the text to show when it was not.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub structured: Option<NormalizedStrategy>,
    pub text: String,
}

impl Normalized {
    pub fn is_structured(&self) -> bool {
        self.structured.is_some()
    }
}

const DIRECT_PATHS: [&[&str]; 4] = [&["result"], &["output"], &["variables"], &["thread", "variables"]];

/// Candidate locations in search order: the payload itself, its direct
/// result fields, then the `content` of every post.
fn candidates(raw: &Value) -> Vec<&Value> {
    let mut found = vec![raw];
    found.extend(DIRECT_PATHS.iter().filter_map(|path| lookup(raw, path)));

    let posts = truthy_field(raw, "posts").or_else(|| lookup(raw, &["thread", "posts"]));
    if let Some(Value::Array(posts)) = posts {
        found.extend(posts.iter().filter_map(|post| truthy_field(post, "content")));
    }

    found
}

/// Decode a field that may hold either a value or a JSON string of one.
fn decode_field(value: &Value) -> Option<Value> {
    match value {
        Value::String(text) => parse_embedded_json(text),
        other if is_truthy(other) => Some(other.clone()),
        _ => None,
    }
}

/// Resolve a candidate to a strategy, unwrapping and decoding as needed.
pub fn resolve(value: &Value) -> Option<NormalizedStrategy> {
    match classify(value) {
        Classification::Unrecognized => None,
        Classification::Bare(map) => Some(NormalizedStrategy {
            campaign_strategy: map.clone(),
            validate_strategy: None,
        }),
        Classification::Wrapped {
            campaign_strategy,
            validate_strategy,
        } => {
            let inner = decode_field(campaign_strategy)?;
            let validate_strategy = validate_strategy.and_then(decode_field);
            match classify(&inner) {
                Classification::Bare(map) => Some(NormalizedStrategy {
                    campaign_strategy: map.clone(),
                    validate_strategy,
                }),
                Classification::Wrapped { .. } => resolve(&inner).map(|mut nested| {
                    if nested.validate_strategy.is_none() {
                        nested.validate_strategy = validate_strategy;
                    }
                    nested
                }),
                Classification::Unrecognized => None,
            }
        }
    }
}

/// Search `raw` for a strategy, keeping the longest string seen as fallback
/// text. When nothing structured or textual turns up, the fallback is the
/// payload itself (pretty-printed unless it already is a string).
pub fn normalize(raw: &Value) -> Normalized {
    let mut structured = None;
    let mut text = String::new();

    for (idx, candidate) in candidates(raw).into_iter().enumerate() {
        if !is_truthy(candidate) {
            continue;
        }

        match candidate {
            Value::Object(_) => {
                if let Some(found) = resolve(candidate) {
                    debug!(candidate = idx, "strategy.found.object");
                    structured = Some(found);
                    break;
                }
            }
            Value::String(body) => {
                if body.chars().count() > text.chars().count() {
                    text.clone_from(body);
                }
                if let Some(found) = parse_embedded_json(body).as_ref().and_then(resolve) {
                    debug!(candidate = idx, "strategy.found.embedded");
                    structured = Some(found);
                    break;
                }
            }
            _ => {}
        }
    }

    if structured.is_none() && text.is_empty() {
        debug!("strategy.fallback.raw");
        text = match raw {
            Value::String(body) => body.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_default(),
        };
    }

    Normalized { structured, text }
}
