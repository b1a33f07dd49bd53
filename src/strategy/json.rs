//! Tolerant JSON helpers shared by the normalizer and the shape functions.
//!
//! Nothing here returns an error: a payload that will not parse is simply
//! "not structured" and callers move on.

use serde_json::Value;
use std::borrow::Cow;

const FENCE: &str = "```";

/// Presence check with the loose semantics the agent payloads rely on:
/// `null`, `false`, `0`, `""` count as absent. Arrays and objects are present
/// even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `value[key]` when it exists and is truthy.
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|field| is_truthy(field))
}

/// Replace the first fenced block (```` ``` ```` or ```` ```json ````,
/// case-insensitive) with its inner content. Text around the fence is kept.
pub fn strip_code_fence(text: &str) -> Cow<'_, str> {
    let Some(open) = text.find(FENCE) else {
        return Cow::Borrowed(text);
    };

    let mut body_start = open + FENCE.len();
    if text
        .get(body_start..body_start + 4)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
    {
        body_start += 4;
    }

    let Some(close_rel) = text[body_start..].find(FENCE) else {
        return Cow::Borrowed(text);
    };
    let close = body_start + close_rel;

    let mut stripped = String::with_capacity(text.len());
    stripped.push_str(&text[..open]);
    stripped.push_str(text[body_start..close].trim());
    stripped.push_str(&text[close + FENCE.len()..]);
    Cow::Owned(stripped)
}

/// Best-effort JSON extraction from agent text.
///
/// Tries the whole string after fence stripping, then the span from the first
/// `{` to the last `}` of the original text.
pub fn parse_embedded_json(text: &str) -> Option<Value> {
    let cleaned = strip_code_fence(text);
    if let Ok(value) = serde_json::from_str::<Value>(cleaned.trim()) {
        return Some(value);
    }

    let open = text.find('{')?;
    let close = text.rfind('}')?;
    if close <= open {
        return None;
    }
    serde_json::from_str::<Value>(&text[open..=close]).ok()
}

/// Follow a chain of object keys.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}
