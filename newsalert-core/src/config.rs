use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scheduler::ScheduleConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub schedule: ScheduleSettings,
    pub content: ContentSettings,
    pub delivery: DeliverySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub warmup_secs: u64,
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSettings {
    pub news_url: String,
    pub blogs_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySettings {
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleSettings::default(),
            content: ContentSettings::default(),
            delivery: DeliverySettings::default(),
        }
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            warmup_secs: 10,
            interval_secs: 300,
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            news_url: "https://example.com/api/content/news.json".to_string(),
            blogs_url: "https://example.com/api/content/blogs.json".to_string(),
        }
    }
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            endpoint: "https://example.com/api/notify-subscribers".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl ScheduleSettings {
    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig {
            warmup: Duration::from_secs(self.warmup_secs),
            interval: Duration::from_secs(self.interval_secs),
        }
    }
}

impl AppConfig {
    /// Path of the configuration file, creating the app directory.
    pub fn config_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir().ok_or("could not determine the configuration directory")?;

        let app_config_dir = config_dir.join("newsalert");
        std::fs::create_dir_all(&app_config_dir)?;

        Ok(app_config_dir.join("config.json"))
    }

    /// Directory holding the persisted notification state.
    pub fn state_dir() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("newsalert")
    }

    /// Load the configuration file, falling back to defaults when it is
    /// absent or unreadable.
    pub fn load() -> Self {
        match Self::load_from_file() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "could not load configuration, using defaults");
                let default_config = Self::default();
                if let Err(save_err) = default_config.save() {
                    tracing::warn!(error = %save_err, "could not save default configuration");
                }
                default_config
            }
        }
    }

    fn load_from_file() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::config_file_path()?;
        let config_content = std::fs::read_to_string(config_path)?;
        let config: AppConfig = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_file_path()?;
        let config_json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, config_json)?;
        Ok(())
    }
}
