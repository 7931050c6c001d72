use serde::Deserialize;

/// Main configuration structure for Sitegrade
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub audit: AuditConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Optional User-Agent header; none sends the reqwest default
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Optional request timeout in seconds; none means requests may
    /// block indefinitely on an unresponsive host
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: Option<u64>,
}

/// Audit behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Number of external-link liveness probes in flight at once.
    /// 1 probes strictly sequentially; higher values use an ordered pool.
    #[serde(rename = "probe-concurrency", default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

fn default_probe_concurrency() -> usize {
    1
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            probe_concurrency: default_probe_concurrency(),
        }
    }
}
