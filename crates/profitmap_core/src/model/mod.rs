//! Model types: business-cost parameters and surface axes.

mod axes;
mod params;

pub use axes::*;
pub use params::*;
