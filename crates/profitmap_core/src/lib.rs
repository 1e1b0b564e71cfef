//! Profit surface model for marketing spend / ROAS exploration
//!
//! This crate turns a small set of business-cost parameters into a profit and
//! efficiency surface over a (marketing spend, ROAS) grid. It provides:
//! - Parameter descriptors with slider ranges, steps and defaults
//! - Evenly spaced axes and a row-major 2-D grid
//! - The closed-form profit model evaluated element-wise over the grid
//! - Break-even (profit == 0) contour extraction
//! - Query-string encoding of the parameters
//!
//! # Example
//!
//! ```ignore
//! use profitmap_core::{ProfitParameters, SurfaceAxes, compute_surface};
//!
//! let params = ProfitParameters::from_query("?weekend_multiplier=1.5").params;
//! let surface = compute_surface(&params, &SurfaceAxes::default());
//!
//! assert_eq!(surface.profit.shape(), (100, 100));
//! println!("{} break-even cells", surface.break_even.cells.len());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod contour;
pub mod error;
pub mod grid;
pub mod query;
pub mod summary;
pub mod surface;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use contour::{BreakEven, Segment};
pub use error::{ParamError, QueryError};
pub use grid::Grid2;
pub use model::{Axis, ParamKey, ParamSpec, ProfitParameters, SurfaceAxes};
pub use query::QueryLoad;
pub use summary::SurfaceSummary;
pub use surface::{PointBreakdown, ProfitSurface, compute_surface, evaluate_point};
