#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod agent;
pub mod app;
pub mod campaign;
pub mod cli;
pub mod config;
pub mod error;
pub mod strategy;
pub mod ui;
pub mod wizard;

pub use agent::{AgentClient, StrategyAgent};
pub use campaign::{CampaignDraft, DraftField, Step};
pub use config::Config;
pub use error::{ConfigError, SubmissionError, ValidationError, VectorError, WizardError};
pub use strategy::{Normalized, NormalizedStrategy, StrategyReport, normalize};
pub use wizard::{Outcome, Phase, WizardController};
