//! Platform abstraction layer for native/web compatibility.
//!
//! [`Storage`] abstracts where the parameter query string and the dashboard
//! configuration live: a data directory on native, the page URL and
//! LocalStorage on the web.

mod storage;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

pub use storage::{Storage, StorageError};

// Re-export platform-specific implementations
#[cfg(feature = "native")]
pub use native::NativeStorage;

#[cfg(feature = "web")]
pub use web::WebStorage;
