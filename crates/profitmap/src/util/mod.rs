pub mod colormap;
pub mod format;
pub mod styles;
