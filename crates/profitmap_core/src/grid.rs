//! Row-major 2-D grid storage.

use serde::{Deserialize, Serialize};

/// 2-D grid with a flat backing array.
///
/// Stores values in row-major order: the column index varies fastest.
/// Surface grids use rows for ROAS and columns for marketing spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Grid2<T> {
    /// Create a new grid with the given shape, filled with `value`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Grid2<T> {
    /// Create a grid from existing row-major data.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { data, rows, cols })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { data, rows, cols }
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.flat_index(row, col).map(|i| &self.data[i])
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over ((row, col), value) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }

    /// Element-wise transform into a new grid of the same shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid2<U> {
        Grid2 {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Element-wise combination of two grids of the same shape.
    ///
    /// Returns `None` when the shapes differ.
    pub fn zip_map<U, V>(&self, other: &Grid2<U>, mut f: impl FnMut(&T, &U) -> V) -> Option<Grid2<V>> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(Grid2 {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl Grid2<f64> {
    /// Smallest and largest finite values, `None` if there are none
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Position and value of the largest finite value
    pub fn argmax(&self) -> Option<((usize, usize), f64)> {
        self.iter()
            .filter(|(_, v)| v.is_finite())
            .fold(None, |best, (idx, &v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((idx, v)),
            })
    }
}

/// Standard meshgrid: `x` varies along columns, `y` along rows.
///
/// Returns `(xx, yy)` with `xx[i][j] = x[j]` and `yy[i][j] = y[i]`.
pub fn meshgrid(x: &[f64], y: &[f64]) -> (Grid2<f64>, Grid2<f64>) {
    let xx = Grid2::from_fn(y.len(), x.len(), |_, col| x[col]);
    let yy = Grid2::from_fn(y.len(), x.len(), |row, _| y[row]);
    (xx, yy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meshgrid_orientation() {
        let (xx, yy) = meshgrid(&[0.0, 10.0, 20.0], &[1.0, 2.0]);
        assert_eq!(xx.shape(), (2, 3));
        assert_eq!(xx.row(0), Some(&[0.0, 10.0, 20.0][..]));
        assert_eq!(xx.row(1), Some(&[0.0, 10.0, 20.0][..]));
        assert_eq!(yy.row(0), Some(&[1.0, 1.0, 1.0][..]));
        assert_eq!(yy.get(1, 2), Some(&2.0));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let grid = Grid2::new(2, 2, 0.0);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        assert!(Grid2::from_data(2, 3, vec![0; 5]).is_none());
        assert!(Grid2::from_data(2, 3, vec![0; 6]).is_some());
    }

    #[test]
    fn test_zip_map_requires_same_shape() {
        let a = Grid2::new(2, 2, 1.0);
        let b = Grid2::new(2, 3, 1.0);
        assert!(a.zip_map(&b, |x, y| x + y).is_none());
        let sum = a.zip_map(&a, |x, y| x + y).unwrap();
        assert!(sum.data().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_min_max_and_argmax_skip_non_finite() {
        let grid = Grid2::from_data(2, 2, vec![1.0, f64::NAN, -3.0, 7.0]).unwrap();
        assert_eq!(grid.min_max(), Some((-3.0, 7.0)));
        assert_eq!(grid.argmax(), Some(((1, 1), 7.0)));
    }

    #[test]
    fn test_iter_yields_row_major_indices() {
        let grid = Grid2::from_fn(2, 2, |r, c| r * 10 + c);
        let items: Vec<_> = grid.iter().map(|(idx, v)| (idx, *v)).collect();
        assert_eq!(
            items,
            vec![((0, 0), 0), ((0, 1), 1), ((1, 0), 10), ((1, 1), 11)]
        );
    }
}
