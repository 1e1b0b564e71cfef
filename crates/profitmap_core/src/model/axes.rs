//! Evenly spaced axes for the (marketing spend, ROAS) grid.

use serde::{Deserialize, Serialize};

/// An evenly spaced axis of `count` points from `min` to `max` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl Axis {
    pub fn new(min: f64, max: f64, count: usize) -> Self {
        Self { min, max, count }
    }

    /// Generate the axis values
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match self.count {
            0 => Vec::new(),
            1 => vec![self.min],
            n => {
                let step = (self.max - self.min) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        // Pin the last point so the range is inclusive without drift
                        if i == n - 1 {
                            self.max
                        } else {
                            self.min + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }

    /// Distance between neighbouring points (0 for fewer than two points)
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.max - self.min) / (self.count - 1) as f64
        }
    }

    /// Index of the point nearest to `value`
    #[must_use]
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let step = self.step();
        if step == 0.0 {
            return Some(0);
        }
        let idx = ((value - self.min) / step).round();
        Some(idx.clamp(0.0, (self.count - 1) as f64) as usize)
    }
}

/// The two axes of the profit surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceAxes {
    /// Marketing spend in € (grid columns)
    pub spend: Axis,
    /// Return on ad spend (grid rows)
    pub roas: Axis,
}

impl SurfaceAxes {
    pub const DEFAULT_POINTS: usize = 100;

    /// Shape of every derived array: (roas points, spend points)
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.roas.count, self.spend.count)
    }
}

impl Default for SurfaceAxes {
    fn default() -> Self {
        Self {
            spend: Axis::new(0.0, 1000.0, Self::DEFAULT_POINTS),
            roas: Axis::new(1.0, 8.0, Self::DEFAULT_POINTS),
        }
    }
}
