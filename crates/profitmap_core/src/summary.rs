//! Headline figures derived from a computed surface.

use serde::{Deserialize, Serialize};

use crate::surface::ProfitSurface;

/// A grid cell with its coordinates and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellValue {
    pub row: usize,
    pub col: usize,
    pub marketing_spend: f64,
    pub roas: f64,
    pub value: f64,
}

/// Summary statistics of a [`ProfitSurface`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSummary {
    pub peak_profit: Option<CellValue>,
    pub peak_efficiency: Option<CellValue>,
    pub worst_profit: Option<f64>,
    /// Share of cells with positive profit (0.0 to 1.0)
    pub profitable_share: f64,
}

impl SurfaceSummary {
    #[must_use]
    pub fn from_surface(surface: &ProfitSurface) -> Self {
        let cell = |((row, col), value): ((usize, usize), f64)| CellValue {
            row,
            col,
            marketing_spend: surface.spend_values[col],
            roas: surface.roas_values[row],
            value,
        };

        let total = surface.profit.len();
        let profitable = surface.profit.data().iter().filter(|&&p| p > 0.0).count();
        let profitable_share = if total == 0 {
            0.0
        } else {
            profitable as f64 / total as f64
        };

        Self {
            peak_profit: surface.profit.argmax().map(cell),
            peak_efficiency: surface.efficiency.argmax().map(cell),
            worst_profit: surface.profit.min_max().map(|(lo, _)| lo),
            profitable_share,
        }
    }
}

/// Smallest ROAS at which profit reaches zero along a spend column.
///
/// Scans the column upward from the lowest ROAS and linearly interpolates the
/// first crossing from loss to profit. Returns the lowest ROAS when the column
/// is already profitable there, and `None` when it never becomes profitable.
#[must_use]
pub fn break_even_roas(surface: &ProfitSurface, col: usize) -> Option<f64> {
    let profit = &surface.profit;
    if col >= profit.cols() || profit.rows() == 0 {
        return None;
    }

    let first = *profit.get(0, col)?;
    if first >= 0.0 {
        return surface.roas_values.first().copied();
    }

    for row in 1..profit.rows() {
        let below = *profit.get(row - 1, col)?;
        let here = *profit.get(row, col)?;
        if below < 0.0 && here >= 0.0 {
            let (r0, r1) = (surface.roas_values[row - 1], surface.roas_values[row]);
            let t = -below / (here - below);
            return Some(r0 + (r1 - r0) * t);
        }
    }
    None
}
