use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, Level};

use crate::backend::error::ConfigError;
use crate::backend::session::Session;

pub const DEFAULT_CONFIG_PATH: &str = "portal.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub session: Session,
    pub seed_demo_data: bool,
    pub recent_year_count: usize,
    pub max_upload_bytes: u64,
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            session: Session::default(),
            seed_demo_data: true,
            recent_year_count: 10,
            max_upload_bytes: 10 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}

impl PortalConfig {
    /// Reads the config file, or returns defaults when there is none.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config: PortalConfig = serde_json::from_str(&raw)?;
        info!(path = %path.display(), faculty = ?config.session.faculty, "Loaded portal config");
        Ok(config)
    }

    /// Unknown level names fall back to INFO.
    pub fn tracing_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
