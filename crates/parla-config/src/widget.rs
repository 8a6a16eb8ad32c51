use std::env;

use serde::{Deserialize, Serialize};

fn default_server_url() -> String {
    "http://127.0.0.1:8080/translate".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "es".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_view_width() -> usize {
    72
}

fn default_view_height() -> usize {
    10
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Where the widget posts its translation requests.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Quiet interval after the last edit before a request fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Per-request timeout for calls to the gateway.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Output viewport, in wrapped columns and visible rows.
    #[serde(default = "default_view_width")]
    pub view_width: usize,
    #[serde(default = "default_view_height")]
    pub view_height: usize,
}

impl WidgetConfig {
    pub fn new() -> Self {
        let server_url = env::var("SERVER_URL").unwrap_or_else(|_| default_server_url());

        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_debounce_ms);

        let source_lang = env::var("SOURCE_LANG").unwrap_or_else(|_| default_source_lang());
        let target_lang = env::var("TARGET_LANG").unwrap_or_else(|_| default_target_lang());

        let request_timeout_ms = env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout_ms);

        let view_width = env::var("VIEW_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_view_width);

        let view_height = env::var("VIEW_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_view_height);

        Self {
            server_url,
            debounce_ms,
            source_lang,
            target_lang,
            request_timeout_ms,
            view_width,
            view_height,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            debounce_ms: default_debounce_ms(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            request_timeout_ms: default_request_timeout_ms(),
            view_width: default_view_width(),
            view_height: default_view_height(),
        }
    }
}
