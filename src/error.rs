//! Error types for the strategy engine.
//!
//! Subsystems return their own `thiserror` enums so callers can branch on the
//! failure (re-prompt on a validation error, keep the form on a submission
//! error). The binary and the interactive flow wrap everything in
//! `anyhow::Result` with context.

use thiserror::Error;

use crate::campaign::{DraftField, Step};

/// Any failure the library surfaces, for callers that want one type.
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("wizard: {0}")]
    Wizard(#[from] WizardError),

    #[error("submission: {0}")]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A config value that cannot be used. Reading and parsing the file are
/// reported through `anyhow` context instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// The draft cannot leave the active step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please complete the required fields to proceed ({step}): {}", field_list(.fields))]
    MissingFields { step: Step, fields: Vec<DraftField> },

    #[error("{field} accepts at most {max} selections")]
    TooManySelections { field: DraftField, max: usize },
}

fn field_list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The agent run did not produce a response. The draft is untouched.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("agent API key not set. Add `api_key` under [agent] in config.toml or export VECTOR_API_KEY")]
    MissingCredential,

    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status; `body` is scrubbed of secrets but otherwise complete.
    #[error("agent run failed: {status} {body}")]
    Service { status: u16, body: String },

    #[error("failed to encode draft: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("a submission is already in flight")]
    Busy,

    #[error("the campaign has already been submitted; start a new one to continue")]
    AlreadyComplete,

    #[error("no submission is in flight")]
    NotSubmitting,
}

pub type Result<T> = std::result::Result<T, VectorError>;
