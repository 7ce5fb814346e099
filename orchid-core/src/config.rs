//! Application configuration
//!
//! Defaults, optionally overlaid by a JSON file, then by environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::domain::{DomainError, DomainResult};

pub const ENV_API_URL: &str = "ORCHIDS_API_URL";
pub const ENV_DATA_DIR: &str = "ORCHIDS_DATA_DIR";

const DB_FILE_NAME: &str = "orchids.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog endpoint
    pub api_url: String,
    /// Directory holding the favorites database
    pub data_dir: PathBuf,
    /// Log directory, `<data_dir>/logs` when unset
    pub log_dir: Option<PathBuf>,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CATALOG_URL.to_string(),
            data_dir: PathBuf::from(".orchids"),
            log_dir: None,
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> DomainResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                DomainError::NotFound(format!("config file {}", path.display()))
            }
            _ => DomainError::InvalidInput(format!("{}: {}", path.display(), e)),
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every request fail
    pub fn validate(&self) -> DomainResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(DomainError::InvalidInput(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Override fields from variables resolved through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("logs"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.db_path(), PathBuf::from(".orchids").join("orchids.db"));
        assert_eq!(config.log_dir(), PathBuf::from(".orchids").join("logs"));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orchids.json");
        std::fs::write(&path, r#"{"data_dir": "/tmp/orchids", "request_timeout_secs": 3}"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/orchids"));
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.api_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orchids.json");
        std::fs::write(&path, r#"{"request_timeout_secs": 0}"#).unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "http://localhost:8080/categories"),
            (ENV_DATA_DIR, ""),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_url, "http://localhost:8080/categories");
        // Empty values are ignored
        assert_eq!(config.data_dir, PathBuf::from(".orchids"));
    }
}
