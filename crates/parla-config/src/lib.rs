use serde::{Deserialize, Serialize};

use self::provider::ProviderConfig;
use self::server::ServerConfig;
use self::widget::WidgetConfig;

pub mod provider;
pub mod server;
pub mod widget;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub widget: WidgetConfig,
}

impl Config {
    /// Read the whole configuration from the environment. Every field has a
    /// code default except the provider endpoint, whose absence is surfaced
    /// per request, not here.
    pub fn new() -> Self {
        Config {
            provider: ProviderConfig::new(),
            server: ServerConfig::new(),
            widget: WidgetConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
            widget: WidgetConfig::default(),
        }
    }
}
