//! BrickLink minifigure report generator
//!
//! Drives a headless Chrome instance via chromiumoxide to fetch a minifig's
//! catalog page (and its set/book cross-reference listings), extracts the
//! catalog metadata from the rendered HTML, and renders a plain text report.

mod browser;
pub mod browser_setup;
pub mod extract;
pub mod report;
pub mod session;
mod utils;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub use browser::{BrowserError, BrowserResult, BrowserWrapper};
pub use session::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How long to wait for the consent button before giving up (ms)
    #[serde(default = "default_consent_wait_ms")]
    pub consent_wait_ms: u64,

    /// Delay after consent dismissal to let deferred content render (ms)
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Browser security and launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Disable web security features (Same-Origin Policy, etc.)
    /// WARNING: Only enable for trusted content
    #[serde(default = "default_disable_security")]
    pub disable_security: bool,
}

fn default_consent_wait_ms() -> u64 {
    10_000
}

fn default_settle_ms() -> u64 {
    200
}

fn default_headless() -> bool {
    true
}

fn default_disable_security() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            consent_wait_ms: default_consent_wait_ms(),
            settle_ms: default_settle_ms(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            disable_security: default_disable_security(),
        }
    }
}

/// Load config from config.yaml in package root
pub fn load_yaml_config() -> anyhow::Result<Config> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.yaml");

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}
