use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::http_client::build_agent_client;
use super::scrub::{log_excerpt, sanitize_error_body, service_error};
use crate::campaign::CampaignDraft;
use crate::config::AgentConfig;
use crate::error::SubmissionError;

/// Runs a campaign draft through the remote strategy agent.
#[async_trait]
pub trait StrategyAgent: Send + Sync {
    /// Submit the draft and return the raw response payload.
    async fn run(&self, draft: &CampaignDraft) -> Result<Value, SubmissionError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunRequest<'a> {
    agent_id: &'a str,
    workflow: &'a str,
    variables: RunVariables,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunVariables {
    /// The draft, JSON-encoded a second time as the workflow expects.
    webhook_params: String,
}

pub struct AgentClient {
    client: Client,
    endpoint: String,
    agent_id: String,
    workflow: String,
    api_key: Option<String>,
}

impl AgentClient {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            client: build_agent_client(config.timeout_secs),
            endpoint: config.endpoint.trim().to_string(),
            agent_id: config.agent_id.clone(),
            workflow: config.workflow.clone(),
            api_key: config.api_key().map(ToString::to_string),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, draft: &CampaignDraft) -> Result<RunRequest<'_>, SubmissionError> {
        Ok(RunRequest {
            agent_id: &self.agent_id,
            workflow: &self.workflow,
            variables: RunVariables {
                webhook_params: draft.to_webhook_params()?,
            },
        })
    }
}

#[async_trait]
impl StrategyAgent for AgentClient {
    async fn run(&self, draft: &CampaignDraft) -> Result<Value, SubmissionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SubmissionError::MissingCredential)?;
        let body = self.request_body(draft)?;

        info!(endpoint = %self.endpoint, workflow = %self.workflow, "agent.run.start");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                SubmissionError::Network(sanitize_error_body(&e.to_string(), Some(api_key)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = service_error(response, Some(api_key)).await;
            if let SubmissionError::Service { body, .. } = &err {
                warn!(status = status.as_u16(), body = %log_excerpt(body), "agent.run.failed");
            }
            return Err(err);
        }

        let text = response.text().await.map_err(|e| {
            SubmissionError::Network(sanitize_error_body(&e.to_string(), Some(api_key)))
        })?;
        info!(status = status.as_u16(), bytes = text.len(), "agent.run.complete");

        Ok(serde_json::from_str(&text).unwrap_or_else(|_| {
            debug!("agent.run.non_json_body");
            Value::String(text)
        }))
    }
}
