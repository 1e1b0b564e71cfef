//! Data directory storage (native only).
//!
//! Directory structure:
//! ~/.profitmap/
//!   config.yaml          # Axes and chart preferences
//!   params.query         # Saved parameters as a query string
//!   profitmap.log        # Log file

use std::fs;
use std::path::{Path, PathBuf};

use super::config_data::DashboardConfig;
use crate::platform::StorageError;

/// Manages the data directory (native only)
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.profitmap/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".profitmap")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn query_path(&self) -> PathBuf {
        self.root.join("params.query")
    }

    /// Create the data directory if missing
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load config.yaml, writing the defaults on first run
    pub fn load_config(&self) -> Result<DashboardConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            let config = DashboardConfig::default();
            self.save_config(&config)?;
            tracing::info!(path = %config_path.display(), "Wrote default config");
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save_config(&self, config: &DashboardConfig) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Read the saved query string, `None` if nothing was saved yet
    pub fn load_query(&self) -> Result<Option<String>, StorageError> {
        let query_path = self.query_path();
        if !query_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&query_path)
            .map_err(|e| StorageError::Io(format!("Failed to read parameters: {}", e)))?;
        let query = content.trim();
        Ok((!query.is_empty()).then(|| query.to_string()))
    }

    pub fn save_query(&self, query: &str) -> Result<(), StorageError> {
        self.init()?;
        fs::write(self.query_path(), format!("{query}\n"))
            .map_err(|e| StorageError::Io(format!("Failed to write parameters: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join(".profitmap"));

        let config = data_dir.load_config().unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert!(temp_dir.path().join(".profitmap/config.yaml").exists());

        // Second load reads the written file
        assert_eq!(data_dir.load_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        fs::write(temp_dir.path().join("config.yaml"), "efficiency_levels: [oops").unwrap();

        assert!(matches!(data_dir.load_config(), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_save_and_load_query() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join("nested"));

        assert_eq!(data_dir.load_query().unwrap(), None);
        data_dir.save_query("work_cost=0.25").unwrap();
        assert_eq!(
            data_dir.load_query().unwrap(),
            Some("work_cost=0.25".to_string())
        );
    }
}
