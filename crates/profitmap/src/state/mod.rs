mod app_state;
mod camera;
mod tabs;

// Re-export all types from submodules
pub use app_state::*;
pub use camera::*;
pub use tabs::*;
