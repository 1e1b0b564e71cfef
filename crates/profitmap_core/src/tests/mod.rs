//! Integration tests for the profitmap model
//!
//! Tests are organized by topic:
//! - `surface` - Profit model evaluation and surface shape
//! - `params` - Parameter descriptors, clamping and nudging
//! - `query` - Query-string reading and writing
//! - `contour` - Break-even cells and marching-squares segments
//! - `summary` - Headline figures of a surface
