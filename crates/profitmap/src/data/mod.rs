pub mod config_data;
#[cfg(feature = "native")]
pub mod storage;
