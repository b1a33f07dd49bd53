use std::borrow::Cow;

use crate::error::SubmissionError;

/// Longest error text written to a log line or a network error.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

const REDACTED: &str = "[REDACTED]";

/// Markers whose following token is a credential.
const SECRET_MARKERS: [&str; 12] = [
    "Bearer ",
    "bearer ",
    "sk-",
    "api_key=",
    "apiKey=",
    "access_token=",
    "\"api_key\":\"",
    "\"apiKey\":\"",
    "\"access_token\":\"",
    "\"token\":\"",
    "\"secret\":\"",
    "\"authorization\":\"",
];

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

/// Replace the token after every occurrence of `marker`. Bare markers stay.
fn redact_after(text: &mut String, marker: &str) {
    let mut from = 0;
    while let Some(rel) = text[from..].find(marker) {
        let token_start = from + rel + marker.len();
        let token_len: usize = text[token_start..]
            .chars()
            .take_while(|c| is_token_char(*c))
            .map(char::len_utf8)
            .sum();

        if token_len == 0 {
            from = token_start;
            continue;
        }

        text.replace_range(token_start..token_start + token_len, REDACTED);
        from = token_start + REDACTED.len();
    }
}

/// Redact credential-looking tokens, plus `known_secret` wherever it appears.
pub fn scrub_secrets<'a>(input: &'a str, known_secret: Option<&str>) -> Cow<'a, str> {
    let known_secret = known_secret.filter(|secret| !secret.is_empty());
    let has_marker = SECRET_MARKERS.iter().any(|marker| input.contains(marker));
    let has_known = known_secret.is_some_and(|secret| input.contains(secret));
    if !has_marker && !has_known {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = match known_secret {
        Some(secret) => input.replace(secret, REDACTED),
        None => input.to_string(),
    };
    for marker in SECRET_MARKERS {
        redact_after(&mut scrubbed, marker);
    }
    Cow::Owned(scrubbed)
}

/// Cap already-scrubbed text at [`MAX_ERROR_BODY_CHARS`] characters.
pub fn log_excerpt(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Scrub and cap an error message at [`MAX_ERROR_BODY_CHARS`] characters.
pub fn sanitize_error_body(input: &str, known_secret: Option<&str>) -> String {
    let scrubbed = scrub_secrets(input.trim(), known_secret);
    log_excerpt(&scrubbed).into_owned()
}

/// Turn a non-success response into a [`SubmissionError::Service`]. The body
/// is scrubbed but kept whole.
pub async fn service_error(response: reqwest::Response, known_secret: Option<&str>) -> SubmissionError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());
    SubmissionError::Service {
        status,
        body: scrub_secrets(body.trim(), known_secret).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        assert!(matches!(scrub_secrets("agent not found", None), Cow::Borrowed(_)));
    }

    #[test]
    fn bearer_tokens_are_redacted() {
        let scrubbed = scrub_secrets("rejected header Authorization: Bearer abc.def-123 (expired)", None);
        assert_eq!(scrubbed, "rejected header Authorization: Bearer [REDACTED] (expired)");
    }

    #[test]
    fn json_api_keys_are_redacted() {
        let scrubbed = scrub_secrets(r#"{"apiKey":"k-123456","error":"bad"}"#, None);
        assert_eq!(scrubbed, r#"{"apiKey":"[REDACTED]","error":"bad"}"#);
    }

    #[test]
    fn known_secret_is_redacted_anywhere() {
        let scrubbed = scrub_secrets("echo: key xyz987 is invalid", Some("xyz987"));
        assert_eq!(scrubbed, "echo: key [REDACTED] is invalid");
    }

    #[test]
    fn bare_marker_is_left_alone() {
        assert_eq!(scrub_secrets("expected Bearer  token", None), "expected Bearer  token");
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(MAX_ERROR_BODY_CHARS + 10);
        let sanitized = sanitize_error_body(&body, None);
        assert_eq!(sanitized.chars().count(), MAX_ERROR_BODY_CHARS + 3);
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn short_text_is_not_excerpted() {
        assert!(matches!(log_excerpt("quota exceeded"), Cow::Borrowed("quota exceeded")));
        let exact = "x".repeat(MAX_ERROR_BODY_CHARS);
        assert_eq!(log_excerpt(&exact), exact);
    }
}
