//! Dashboard for the ROAS and marketing spend profit surface
//!
//! Renders the surface computed by `profitmap_core` as:
//! - a filled-contour map of profit per euro of marketing spend
//! - a 3-D profit surface at a fixed viewpoint
//! - the same surface under an interactive camera
//!
//! The native build runs in the terminal on crossterm; the web build runs in
//! the browser on ratzilla.

// ============================================================================
// Application
// ============================================================================

pub mod app;
pub mod event;
pub mod logging;

#[cfg(feature = "native")]
pub mod export;

#[cfg(feature = "web")]
pub mod web;

// ============================================================================
// UI modules
// ============================================================================

pub mod components;
pub mod screens;
pub mod util;

// ============================================================================
// State and persistence
// ============================================================================

pub mod data;
pub mod platform;
pub mod state;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use data::config_data::DashboardConfig;
pub use platform::{Storage, StorageError};
pub use state::AppState;

#[cfg(feature = "native")]
pub use data::storage::DataDirectory;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "native")]
pub use platform::NativeStorage;

#[cfg(feature = "web")]
pub use logging::init_logging_web;
#[cfg(feature = "web")]
pub use platform::WebStorage;
