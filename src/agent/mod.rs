//! Submission client for the remote strategy agent.

pub mod client;
pub mod http_client;
pub mod scrub;

pub use client::{AgentClient, StrategyAgent};
