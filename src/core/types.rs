//! Core type definitions

use serde::{Deserialize, Serialize};

/// Dense feature vector; every entry is one independent mode
pub type FeatureVector = Vec<f64>;

/// Dense n×m matrix of kernel values, stored row-major
///
/// Row `i` holds the similarities of the i-th vector of the first batch
/// against every vector of the second batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GramMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl GramMatrix {
    /// Create a zero-filled matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from row-major data
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "Data length must equal rows * cols"
        );
        Self { rows, cols, data }
    }

    /// Number of rows (size of the first batch)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (size of the second batch)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check if the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at row `i`, column `j`
    ///
    /// # Panics
    /// Panics if the index is out of bounds
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "Index out of bounds");
        self.data[i * self.cols + j]
    }

    /// Set the value at row `i`, column `j`
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.rows && j < self.cols, "Index out of bounds");
        self.data[i * self.cols + j] = value;
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major view of all cells
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Convert into nested rows
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    /// Diagonal entries (min(rows, cols) of them)
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols)).map(|i| self.get(i, i)).collect()
    }

    /// Check whether the matrix is square and symmetric within `tolerance`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        if self.rows != self.cols {
            return false;
        }
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                if (self.get(i, j) - self.get(j, i)).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Check that every cell is finite (no overflow or NaN from degenerate overlaps)
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
