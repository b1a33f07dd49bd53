use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::campaign::CampaignDraft;
use crate::campaign::options::DEFAULT_MAX_CHANNELS;
use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://v1.mindstudio-api.com/developer/v2/agents/run";
pub const DEFAULT_AGENT_ID: &str = "75142e1e-6b73-4f2c-8414-61a49356a5da";
pub const DEFAULT_WORKFLOW: &str = "Main";
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Log level for the fmt subscriber (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub wizard: WizardConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent run endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_agent_id")]
    pub agent_id: String,
    /// Workflow to run (default: Main)
    #[serde(default = "default_workflow")]
    pub workflow: String,
    /// Bearer credential. Prefer `VECTOR_API_KEY` over storing it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Overall request timeout in seconds, 0 for none (default: 120)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Most channels a campaign may select, 1 to 3 (default: 3)
    #[serde(default = "default_max_channels")]
    pub max_channels: usize,
    /// Values every new draft starts from
    #[serde(default)]
    pub defaults: CampaignDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Where saved reports go; `~` is expanded (default: current directory)
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_agent_id() -> String {
    DEFAULT_AGENT_ID.into()
}

fn default_workflow() -> String {
    DEFAULT_WORKFLOW.into()
}

fn default_timeout_secs() -> u64 {
    crate::agent::http_client::DEFAULT_TIMEOUT_SECS
}

fn default_max_channels() -> usize {
    DEFAULT_MAX_CHANNELS
}

fn default_output_dir() -> String {
    ".".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            log_level: default_log_level(),
            agent: AgentConfig::default(),
            wizard: WizardConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            agent_id: default_agent_id(),
            workflow: default_workflow(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_channels: default_max_channels(),
            defaults: CampaignDraft::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl AgentConfig {
    /// The configured key, if any and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Key for display: first and last four characters only.
    pub fn redacted_api_key(&self) -> String {
        match self.api_key() {
            None => "(not set)".into(),
            Some(key) if key.chars().count() <= 8 => "****".into(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}…{tail}")
            }
        }
    }
}

impl ReportConfig {
    pub fn resolved_output_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output_dir).into_owned())
    }
}

impl Config {
    pub fn tracing_level(&self) -> tracing::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "error" => tracing::Level::ERROR,
            "info" => tracing::Level::INFO,
            "debug" => tracing::Level::DEBUG,
            "trace" => tracing::Level::TRACE,
            _ => tracing::Level::WARN,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.agent.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::invalid("agent.endpoint", "must not be empty"));
        }
        let url = Url::parse(endpoint)
            .map_err(|e| ConfigError::invalid("agent.endpoint", format!("not a valid URL ({e})")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "agent.endpoint",
                format!("must use http or https, got {}", url.scheme()),
            ));
        }

        if self.agent.agent_id.trim().is_empty() {
            return Err(ConfigError::invalid("agent.agent_id", "must not be empty"));
        }
        if self.agent.workflow.trim().is_empty() {
            return Err(ConfigError::invalid("agent.workflow", "must not be empty"));
        }
        if !(1..=DEFAULT_MAX_CHANNELS).contains(&self.wizard.max_channels) {
            return Err(ConfigError::invalid(
                "wizard.max_channels",
                format!(
                    "must be between 1 and {DEFAULT_MAX_CHANNELS}, got {}",
                    self.wizard.max_channels
                ),
            ));
        }
        let seeded = self.wizard.defaults.channels.len();
        if seeded > self.wizard.max_channels {
            return Err(ConfigError::invalid(
                "wizard.defaults.channels",
                format!("lists {seeded} channels but max_channels is {}", self.wizard.max_channels),
            ));
        }

        let level = self.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid(
                "log_level",
                format!("expected one of {}, got {:?}", LOG_LEVELS.join("|"), self.log_level),
            ));
        }
        Ok(())
    }
}
