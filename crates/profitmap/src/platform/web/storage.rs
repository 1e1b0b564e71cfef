//! Web storage: parameters in the page URL, configuration in LocalStorage.

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage as GlooStorage};
use wasm_bindgen::JsValue;

use crate::data::config_data::DashboardConfig;
use crate::platform::storage::{Storage, StorageError};

/// Key for the dashboard configuration
const CONFIG_KEY: &str = "profitmap_config";

/// Web storage implementation.
///
/// The query string is read from `window.location.search` and written back
/// with `history.replaceState`, so saving never reloads the page.
#[derive(Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn window() -> Result<web_sys::Window, StorageError> {
        web_sys::window().ok_or_else(|| StorageError::NotAvailable("no global window".to_string()))
    }
}

fn js_error(context: &str, err: JsValue) -> StorageError {
    StorageError::Io(format!("{context}: {err:?}"))
}

impl Storage for WebStorage {
    fn load_query(&self) -> Result<Option<String>, StorageError> {
        let search = Self::window()?
            .location()
            .search()
            .map_err(|e| js_error("Failed to read location", e))?;
        let query = search.trim_start_matches('?');
        Ok((!query.is_empty()).then(|| query.to_string()))
    }

    fn save_query(&mut self, query: &str) -> Result<(), StorageError> {
        let window = Self::window()?;
        let pathname = window
            .location()
            .pathname()
            .map_err(|e| js_error("Failed to read location", e))?;
        let url = format!("{pathname}?{query}");

        window
            .history()
            .map_err(|e| js_error("History not available", e))?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|e| js_error("Failed to update URL", e))
    }

    fn load_config(&self) -> Result<DashboardConfig, StorageError> {
        match LocalStorage::get::<DashboardConfig>(CONFIG_KEY) {
            Ok(config) => Ok(config),
            Err(GlooStorageError::KeyNotFound(_)) => {
                let config = DashboardConfig::default();
                self.save_config(&config)?;
                Ok(config)
            }
            Err(e) => Err(StorageError::Parse(format!("Failed to load config: {}", e))),
        }
    }

    fn save_config(&self, config: &DashboardConfig) -> Result<(), StorageError> {
        LocalStorage::set(CONFIG_KEY, config)
            .map_err(|e| StorageError::Io(format!("Failed to save config: {}", e)))
    }
}
