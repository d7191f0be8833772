use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint row under the list
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// strftime pattern for the date in the header
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Hex color overrides keyed by theme field name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            date_format: default_date_format(),
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}
