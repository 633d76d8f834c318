use std::io::ErrorKind;
use std::time::Duration;

use engine::RewardScheme;
use serde::Deserialize;

pub const CLEANUP_CHECK_INTERVAL: Duration = Duration::from_secs(300);
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(3600);

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_files_path: String,
    pub model_path: Option<String>,
    pub rewards: RewardScheme,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_files_path: "server/static".to_string(),
            model_path: None,
            rewards: RewardScheme::default(),
        }
    }
}

impl ServerConfig {
    /// Loads YAML config from `path`. A missing file falls back to defaults;
    /// an unreadable or malformed file is a startup error.
    pub fn load(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to parse config file {}: {}", path, e)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(format!("Failed to read config file {}: {}", path, err)),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
