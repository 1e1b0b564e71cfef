//! The profit model evaluated over the (marketing spend, ROAS) grid.
//!
//! Every derived array is an element-wise function of the meshgrid and the
//! parameters, computed in this order:
//!
//! 1. `revenue = marketing_spend * roas`
//! 2. `production_cost = revenue * production_cost_percentage`
//! 3. `marketing_cost = marketing_spend * (1 + marketing_fee_percentage)`
//! 4. `workload_base_rate = work_cost_percentage + workload_scaling_factor * revenue`
//! 5. `workload_factor = revenue * workload_base_rate`
//! 6. `work_cost = fixed_work_cost + workload_factor`
//! 7. `profit = revenue - production_cost - marketing_cost - work_cost * weekend_multiplier`
//! 8. `efficiency = profit / marketing_spend` where spend is positive, else `0`
//!
//! Evaluation is pure: the same parameters and axes always produce the same
//! surface, and nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::contour::BreakEven;
use crate::grid::{Grid2, meshgrid};
use crate::model::{ProfitParameters, SurfaceAxes};

/// All intermediate values of the profit model for one (spend, roas) point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub marketing_spend: f64,
    pub roas: f64,
    pub revenue: f64,
    pub production_cost: f64,
    pub marketing_cost: f64,
    pub workload_base_rate: f64,
    pub workload_factor: f64,
    pub work_cost: f64,
    pub profit: f64,
    pub efficiency: f64,
}

/// Evaluate the profit model at a single point.
#[must_use]
pub fn evaluate_point(params: &ProfitParameters, marketing_spend: f64, roas: f64) -> PointBreakdown {
    let revenue = marketing_spend * roas;
    let production_cost = revenue * params.production_cost_percentage;
    let marketing_cost = marketing_spend * (1.0 + params.marketing_fee_percentage);

    let workload_base_rate =
        params.work_cost_percentage + params.workload_scaling_factor() * revenue;
    let workload_factor = revenue * workload_base_rate;
    let work_cost = f64::from(params.fixed_work_cost) + workload_factor;

    let profit =
        revenue - production_cost - marketing_cost - work_cost * params.weekend_multiplier;

    // Zero spend has no meaningful profit-per-spend; report 0 instead of dividing
    let efficiency = if marketing_spend > 0.0 {
        profit / marketing_spend
    } else {
        0.0
    };

    PointBreakdown {
        marketing_spend,
        roas,
        revenue,
        production_cost,
        marketing_cost,
        workload_base_rate,
        workload_factor,
        work_cost,
        profit,
        efficiency,
    }
}

/// Profit and efficiency surface for one set of parameters.
///
/// All grids share the shape `(roas.len(), spend.len())`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitSurface {
    pub params: ProfitParameters,
    pub axes: SurfaceAxes,
    /// Marketing spend axis values (columns)
    pub spend_values: Vec<f64>,
    /// ROAS axis values (rows)
    pub roas_values: Vec<f64>,
    pub marketing_spend: Grid2<f64>,
    pub roas: Grid2<f64>,
    pub revenue: Grid2<f64>,
    pub production_cost: Grid2<f64>,
    pub marketing_cost: Grid2<f64>,
    pub work_cost: Grid2<f64>,
    pub profit: Grid2<f64>,
    pub efficiency: Grid2<f64>,
    /// Zero-profit iso-contour
    pub break_even: BreakEven,
}

/// Compute the full surface from scratch.
///
/// This is the single recompute entry point: callers invoke it whenever a
/// parameter or axis changes and replace their previous surface.
#[must_use]
pub fn compute_surface(params: &ProfitParameters, axes: &SurfaceAxes) -> ProfitSurface {
    let spend_values = axes.spend.values();
    let roas_values = axes.roas.values();
    let (marketing_spend, roas) = meshgrid(&spend_values, &roas_values);

    let points = Grid2::from_fn(roas_values.len(), spend_values.len(), |row, col| {
        evaluate_point(params, spend_values[col], roas_values[row])
    });

    let revenue = points.map(|p| p.revenue);
    let production_cost = points.map(|p| p.production_cost);
    let marketing_cost = points.map(|p| p.marketing_cost);
    let work_cost = points.map(|p| p.work_cost);
    let profit = points.map(|p| p.profit);
    let efficiency = points.map(|p| p.efficiency);

    let break_even = BreakEven::compute(&spend_values, &roas_values, &profit);

    ProfitSurface {
        params: *params,
        axes: *axes,
        spend_values,
        roas_values,
        marketing_spend,
        roas,
        revenue,
        production_cost,
        marketing_cost,
        work_cost,
        profit,
        efficiency,
        break_even,
    }
}

impl ProfitSurface {
    /// Shape of every grid: (rows, cols) = (roas points, spend points)
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.profit.shape()
    }

    /// Full breakdown of the model at a grid cell
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Option<PointBreakdown> {
        let spend = *self.marketing_spend.get(row, col)?;
        let roas = *self.roas.get(row, col)?;
        Some(evaluate_point(&self.params, spend, roas))
    }
}
