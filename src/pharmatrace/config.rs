use crate::error::{Result, TraceError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LEDGER_URL: &str = "http://127.0.0.1:9545";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_DATA_FILE: &str = "trace_data.json";

/// Configuration for pharmatrace, stored as config.json in the data
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceConfig {
    /// Base URL of the remote ledger service
    #[serde(default = "default_ledger_url")]
    pub ledger_url: String,

    /// Request timeout for ledger calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Filename of the local fallback store (inside the data directory)
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_ledger_url() -> String {
    DEFAULT_LEDGER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            ledger_url: default_ledger_url(),
            timeout_secs: default_timeout_secs(),
            data_file: default_data_file(),
        }
    }
}

impl TraceConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TraceError::Io)?;
        let config: TraceConfig =
            serde_json::from_str(&content).map_err(TraceError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TraceError::Io)?;
        }
        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TraceError::Serialization)?;
        fs::write(config_path, content).map_err(TraceError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TraceConfig::default();
        assert_eq!(config.ledger_url, "http://127.0.0.1:9545");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.data_file, "trace_data.json");
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TraceConfig::load(dir.path()).unwrap();
        assert_eq!(config, TraceConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let config = TraceConfig {
            ledger_url: "http://ledger.internal:8545".to_string(),
            timeout_secs: 2,
            data_file: "fallback.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = TraceConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"ledger_url": "http://other:9545"}"#,
        )
        .unwrap();

        let config = TraceConfig::load(dir.path()).unwrap();
        assert_eq!(config.ledger_url, "http://other:9545");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.data_file, "trace_data.json");
    }
}
