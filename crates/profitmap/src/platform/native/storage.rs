//! Native storage implementation using the filesystem.

use std::path::{Path, PathBuf};

use crate::data::config_data::DashboardConfig;
use crate::data::storage::DataDirectory;
use crate::platform::storage::{Storage, StorageError};

/// Native storage implementation that wraps DataDirectory.
///
/// A query passed on the command line takes the place of the saved one until
/// the next save.
pub struct NativeStorage {
    data_dir: DataDirectory,
    query_override: Option<String>,
}

impl NativeStorage {
    /// Create a new native storage with the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self {
            data_dir: DataDirectory::new(root),
            query_override: None,
        }
    }

    /// Use `query` instead of the saved parameters on the next load
    pub fn with_query_override(mut self, query: Option<String>) -> Self {
        self.query_override = query;
        self
    }

    /// Get the root path of the storage directory.
    pub fn root(&self) -> &Path {
        self.data_dir.root()
    }
}

impl Storage for NativeStorage {
    fn load_query(&self) -> Result<Option<String>, StorageError> {
        if let Some(query) = &self.query_override {
            tracing::debug!(query = %query, "Using query from command line");
            return Ok(Some(query.clone()));
        }
        self.data_dir.load_query()
    }

    fn save_query(&mut self, query: &str) -> Result<(), StorageError> {
        self.data_dir.save_query(query)?;
        self.query_override = None;
        Ok(())
    }

    fn load_config(&self) -> Result<DashboardConfig, StorageError> {
        self.data_dir.load_config()
    }

    fn save_config(&self, config: &DashboardConfig) -> Result<(), StorageError> {
        self.data_dir.save_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins_until_saved() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = NativeStorage::new(temp_dir.path().to_path_buf())
            .with_query_override(Some("marketing_fee=0.1".to_string()));

        assert_eq!(
            storage.load_query().unwrap().as_deref(),
            Some("marketing_fee=0.1")
        );

        storage.save_query("marketing_fee=0.05").unwrap();
        assert_eq!(
            storage.load_query().unwrap().as_deref(),
            Some("marketing_fee=0.05")
        );
    }
}
