//! Persistence seam between the dashboard and its host.

use std::fmt;

use crate::data::config_data::DashboardConfig;

/// Why a load or save failed
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing failed
    Io(String),
    /// Stored data could not be decoded
    Parse(String),
    /// Data could not be encoded for storage
    Serialize(String),
    /// The backing store does not exist here (e.g. no browser window)
    NotAvailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, msg) = match self {
            StorageError::Io(msg) => ("IO error", msg),
            StorageError::Parse(msg) => ("Parse error", msg),
            StorageError::Serialize(msg) => ("Serialization error", msg),
            StorageError::NotAvailable(msg) => ("Storage not available", msg),
        };
        write!(f, "{kind}: {msg}")
    }
}

impl std::error::Error for StorageError {}

/// Where the parameter query string and the dashboard configuration live.
///
/// The query string is read once at startup and written on save; it never
/// carries the leading `?`.
pub trait Storage {
    /// Stored query string, `None` if nothing was saved yet
    fn load_query(&self) -> Result<Option<String>, StorageError>;

    fn save_query(&mut self, query: &str) -> Result<(), StorageError>;

    fn load_config(&self) -> Result<DashboardConfig, StorageError>;

    fn save_config(&self, config: &DashboardConfig) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::Parse("bad yaml".to_string());
        assert_eq!(err.to_string(), "Parse error: bad yaml");

        let err = StorageError::NotAvailable("no global window".to_string());
        assert_eq!(err.to_string(), "Storage not available: no global window");
    }
}
