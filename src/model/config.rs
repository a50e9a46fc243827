use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml. Every field has a default so the file
/// is optional and may be partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ring the terminal bell when a count completes.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Pulse the counter highlight when the count gets near its target.
    #[serde(default = "default_true")]
    pub flash: bool,
    /// Minimum horizontal travel (in terminal cells) for a swipe to
    /// resolve as archive/delete.
    #[serde(default = "default_swipe_distance")]
    pub swipe_distance: i32,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sound: true,
            flash: true,
            swipe_distance: default_swipe_distance(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides for the theme, e.g. `accent = "#44FF88"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_swipe_distance() -> i32 {
    50
}
