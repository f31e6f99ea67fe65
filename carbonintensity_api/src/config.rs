//! Client configuration with environment overrides.

use std::time::Duration;

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.carbonintensity.org.uk";

/// Request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API origin, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Skip TLS certificate validation.
    ///
    /// Unsafe: any certificate is trusted, including self-signed or
    /// hostname-mismatched ones. Only for local test servers.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `CARBON_INTENSITY_*` environment variables.
    ///
    /// Missing or unparseable values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("CARBON_INTENSITY_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: env_u64("CARBON_INTENSITY_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: std::env::var("CARBON_INTENSITY_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            accept_invalid_certs: env_bool("CARBON_INTENSITY_ACCEPT_INVALID_CERTS")
                .unwrap_or(defaults.accept_invalid_certs),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// See [`ClientConfig::accept_invalid_certs`]. Never enable in production.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

fn default_user_agent() -> String {
    format!("carbonintensity-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
