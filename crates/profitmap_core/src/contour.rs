//! Iso-contour extraction over a [`Grid2`].
//!
//! Two representations of the same iso-line are produced:
//! - grid cells nearest to the level, for cell-based renderers (heatmaps)
//! - marching-squares segments in data coordinates, for line renderers

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::grid::Grid2;

/// A line segment in data coordinates (x = marketing spend, y = ROAS)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// The zero-profit contour of a surface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// (row, col) cells closest to profit == 0, sorted
    pub cells: Vec<(usize, usize)>,
    /// Marching-squares segments of the profit == 0 line
    pub segments: Vec<Segment>,
}

impl BreakEven {
    /// Extract the break-even contour from a profit grid.
    ///
    /// `x` holds the column coordinates and `y` the row coordinates.
    #[must_use]
    pub fn compute(x: &[f64], y: &[f64], profit: &Grid2<f64>) -> Self {
        Self {
            cells: iso_cells(profit, 0.0),
            segments: iso_segments(x, y, profit, 0.0),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.binary_search(&(row, col)).is_ok()
    }
}

/// Cells closest to `z == level`.
///
/// A cell is selected when it sits exactly on the level, or when the value
/// crosses the level between it and its right or lower neighbour and it is
/// the member of that pair nearer to the level.
#[must_use]
pub fn iso_cells(z: &Grid2<f64>, level: f64) -> Vec<(usize, usize)> {
    let (rows, cols) = z.shape();
    let mut cells = BTreeSet::new();

    let offset = |row: usize, col: usize| z.get(row, col).map(|v| v - level);

    for row in 0..rows {
        for col in 0..cols {
            let Some(here) = offset(row, col) else {
                continue;
            };
            if here == 0.0 {
                cells.insert((row, col));
                continue;
            }
            for (nr, nc) in [(row, col + 1), (row + 1, col)] {
                let Some(there) = offset(nr, nc) else {
                    continue;
                };
                let crosses = (here < 0.0 && there > 0.0) || (here > 0.0 && there < 0.0);
                if crosses {
                    if here.abs() <= there.abs() {
                        cells.insert((row, col));
                    } else {
                        cells.insert((nr, nc));
                    }
                }
            }
        }
    }

    cells.into_iter().collect()
}

/// Marching-squares segments of the `z == level` line.
///
/// `x` are the column coordinates and `y` the row coordinates; a grid whose
/// shape does not match the axes yields no segments. Saddle cells are resolved
/// with the cell-centre average.
#[must_use]
pub fn iso_segments(x: &[f64], y: &[f64], z: &Grid2<f64>, level: f64) -> Vec<Segment> {
    let (rows, cols) = z.shape();
    if rows < 2 || cols < 2 || x.len() != cols || y.len() != rows {
        return Vec::new();
    }

    let mut segments = Vec::new();
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            let value = |r: usize, c: usize| z.get(r, c).copied().unwrap_or(level);
            // Corners counter-clockwise from the lower-left
            let corners = [
                (x[col], y[row]),
                (x[col + 1], y[row]),
                (x[col + 1], y[row + 1]),
                (x[col], y[row + 1]),
            ];
            let values = [
                value(row, col),
                value(row, col + 1),
                value(row + 1, col + 1),
                value(row + 1, col),
            ];
            if values.iter().any(|v| !v.is_finite()) {
                continue;
            }

            let case_index = values
                .iter()
                .enumerate()
                .fold(0u8, |acc, (bit, &v)| acc | (u8::from(v > level) << bit));

            let centre_above = values.iter().sum::<f64>() / 4.0 > level;
            let edges: &[(u8, u8)] = match case_index {
                0 | 15 => &[],
                1 | 14 => &[(3, 0)],
                2 | 13 => &[(0, 1)],
                3 | 12 => &[(3, 1)],
                4 | 11 => &[(1, 2)],
                6 | 9 => &[(0, 2)],
                7 | 8 => &[(3, 2)],
                5 if centre_above => &[(0, 1), (2, 3)],
                5 => &[(3, 0), (1, 2)],
                10 if centre_above => &[(3, 0), (1, 2)],
                10 => &[(0, 1), (2, 3)],
                _ => &[],
            };

            for &(a, b) in edges {
                segments.push(Segment {
                    start: interpolate_edge(a, &corners, &values, level),
                    end: interpolate_edge(b, &corners, &values, level),
                });
            }
        }
    }
    segments
}

fn interpolate_edge(edge: u8, corners: &[(f64, f64); 4], values: &[f64; 4], level: f64) -> (f64, f64) {
    let (a, b) = match edge {
        0 => (0, 1),
        1 => (1, 2),
        2 => (2, 3),
        _ => (3, 0),
    };
    let (va, vb) = (values[a], values[b]);
    let t = if vb == va {
        0.5
    } else {
        ((level - va) / (vb - va)).clamp(0.0, 1.0)
    };
    let (pa, pb) = (corners[a], corners[b]);
    (pa.0 + (pb.0 - pa.0) * t, pa.1 + (pb.1 - pa.1) * t)
}

/// Evenly spaced filled-contour levels from `min` to `max` inclusive
#[must_use]
pub fn contour_levels(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count <= 1 || (max - min).abs() < f64::EPSILON {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count).map(|i| min + step * i as f64).collect()
}

/// Index of the filled-contour band containing `value`.
///
/// `levels.len() - 1` bands exist; values outside the range fall into the
/// first or last band.
#[must_use]
pub fn level_band(value: f64, levels: &[f64]) -> usize {
    if levels.len() < 2 {
        return 0;
    }
    let above = levels.partition_point(|&l| l <= value);
    above.saturating_sub(1).min(levels.len() - 2)
}
