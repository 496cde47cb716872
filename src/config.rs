use serde::Deserialize;

use crate::summary::{DEFAULT_UTC_OFFSET_HOURS, SummaryOptions};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sources: SourcesConfig,
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// JSON sample batch: bare array or `{ "result": [...], "lastUpdated": n }`.
    pub samples_path: String,
    /// JSON array of collector items; display names stay empty when unset.
    #[serde(default)]
    pub collectors_path: Option<String>,
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
}

fn default_max_samples() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    /// Max number of summaries kept in the broadcast channel for /ws/summary (slow clients may lag).
    pub broadcast_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Hour shift applied to chart labels. The deployed dashboard used 19.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

fn default_utc_offset_hours() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            utc_offset_hours: self.display.utc_offset_hours,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.sources.samples_path.is_empty(),
            "sources.samples_path must be non-empty"
        );
        anyhow::ensure!(
            self.sources
                .collectors_path
                .as_deref()
                .is_none_or(|p| !p.is_empty()),
            "sources.collectors_path must be non-empty when set"
        );
        anyhow::ensure!(
            self.sources.max_samples > 0,
            "sources.max_samples must be > 0, got {}",
            self.sources.max_samples
        );
        anyhow::ensure!(
            self.refresh.interval_secs > 0,
            "refresh.interval_secs must be > 0, got {}",
            self.refresh.interval_secs
        );
        anyhow::ensure!(
            self.refresh.broadcast_capacity > 0,
            "refresh.broadcast_capacity must be > 0, got {}",
            self.refresh.broadcast_capacity
        );
        anyhow::ensure!(
            (-23..=23).contains(&self.display.utc_offset_hours),
            "display.utc_offset_hours must be between -23 and 23, got {}",
            self.display.utc_offset_hours
        );
        Ok(())
    }
}
