pub mod env_overrides;
pub mod loader;
pub mod schema;
#[cfg(test)]
mod test_env;

pub use schema::{AgentConfig, Config, ReportConfig, WizardConfig};
