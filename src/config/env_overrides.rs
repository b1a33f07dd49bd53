use super::Config;

pub const ENV_API_KEY: &str = "VECTOR_API_KEY";
pub const ENV_AGENT_ID: &str = "VECTOR_AGENT_ID";
pub const ENV_ENDPOINT: &str = "VECTOR_ENDPOINT";
pub const ENV_WORKFLOW: &str = "VECTOR_WORKFLOW";
pub const ENV_LOG_LEVEL: &str = "VECTOR_LOG_LEVEL";

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(ENV_API_KEY)
            && !key.trim().is_empty()
        {
            self.agent.api_key = Some(key.trim().to_string());
        }

        if let Ok(agent_id) = std::env::var(ENV_AGENT_ID)
            && !agent_id.is_empty()
        {
            self.agent.agent_id = agent_id;
        }

        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT)
            && !endpoint.is_empty()
        {
            self.agent.endpoint = endpoint;
        }

        if let Ok(workflow) = std::env::var(ENV_WORKFLOW)
            && !workflow.is_empty()
        {
            self.agent.workflow = workflow;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL)
            && !level.is_empty()
        {
            self.log_level = level;
        }
    }
}
