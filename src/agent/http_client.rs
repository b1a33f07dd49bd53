use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Overall deadline for one run; `0` means none.
pub fn overall_timeout(timeout_secs: u64) -> Option<Duration> {
    (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs))
}

/// Pooled client for agent runs. A run can take minutes, so the overall
/// timeout is configurable (or off) while connects fail fast.
pub fn build_agent_client(timeout_secs: u64) -> Client {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .user_agent(concat!("vector-strategy/", env!("CARGO_PKG_VERSION")));

    if let Some(timeout) = overall_timeout(timeout_secs) {
        builder = builder.timeout(timeout);
    }

    builder.build().unwrap_or_else(|_| Client::new())
}
