use std::env;

use serde::{Deserialize, Serialize};

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Outbound translation provider. The endpoint is deliberately optional: a
/// missing value is a request-time failure, the process still starts.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the provider, e.g.
    /// `https://translate.googleapis.com/translate_a/single`.
    pub endpoint: Option<String>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ProviderConfig {
    pub fn new() -> Self {
        let endpoint = env::var("TRANSLATE_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let request_timeout_ms = env::var("TRANSLATE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout_ms);

        Self {
            endpoint,
            request_timeout_ms,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}
