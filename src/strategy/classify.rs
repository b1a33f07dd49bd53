use serde_json::{Map, Value};

use super::json::is_truthy;

/// Top-level keys that mark an object as a campaign strategy.
pub const CORE_KEYS: [&str; 5] = ["overview", "funnel", "kpis", "channel_strategy", "timeline"];

/// Outer key some workflows wrap the strategy in.
pub const WRAPPER_KEY: &str = "campaign_strategy";

/// Sibling of [`WRAPPER_KEY`] holding the validator's verdict.
pub const VALIDATION_KEY: &str = "validate_strategy";

/// What a candidate value looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    Unrecognized,
    /// The object itself carries strategy sections.
    Bare(&'a Map<String, Value>),
    /// The strategy sits under [`WRAPPER_KEY`], possibly JSON-encoded.
    Wrapped {
        campaign_strategy: &'a Value,
        validate_strategy: Option<&'a Value>,
    },
}

impl Classification<'_> {
    pub fn is_strategy(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// Classify a value by key presence. A non-empty wrapper takes precedence over
/// core keys on the same object.
pub fn classify(value: &Value) -> Classification<'_> {
    let Value::Object(map) = value else {
        return Classification::Unrecognized;
    };

    if let Some(inner) = map.get(WRAPPER_KEY).filter(|inner| is_truthy(inner)) {
        return Classification::Wrapped {
            campaign_strategy: inner,
            validate_strategy: map.get(VALIDATION_KEY),
        };
    }

    if CORE_KEYS.iter().any(|key| map.contains_key(*key)) {
        Classification::Bare(map)
    } else {
        Classification::Unrecognized
    }
}
