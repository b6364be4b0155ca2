//! Configuration management for the questfolio binary.
//!
//! TOML-backed, with serde-typed sections and sensible defaults for every
//! value, so a missing config file never blocks play. Sections:
//!
//! - [`GameConfig`] - presentation of the session itself (banner, boot delay)
//! - [`LoggingConfig`] - log level and optional log file
//! - [`UiConfig`] - terminal color policy and input prompt
//!
//! ```toml
//! [game]
//! banner = "questfolio"
//! boot_delay_ms = 1000
//!
//! [logging]
//! level = "info"
//! file = "questfolio.log"
//!
//! [ui]
//! color = "auto"
//! prompt = "> "
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Line printed above the first scene.
    pub banner: String,
    /// Pause between the boot line and the first scene render.
    pub boot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            banner: "System starting...".to_string(),
            boot_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, log lines append here instead of stderr so they never
    /// interleave with the story transcript.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("questfolio.log".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color policy: "auto" (on when stdout is a TTY), "always", or "never".
    /// Invalid values fall back to "auto".
    pub color: String,
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: "auto".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

impl UiConfig {
    /// Resolve the color policy against the current stdout.
    pub fn use_color(&self) -> bool {
        match self.color.as_str() {
            "always" => true,
            "never" => false,
            "auto" => atty::is(atty::Stream::Stdout),
            other => {
                eprintln!("Invalid ui.color '{}', defaulting to auto", other);
                atty::is(atty::Stream::Stdout)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Write the default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
