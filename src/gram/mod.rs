//! Gram matrix construction
//!
//! Evaluates a [`Kernel`] on every (row, column) pair of two batches of
//! feature vectors. Cells are independent, so with the `parallel` feature
//! rows are filled concurrently; the result is identical to the serial path.

use crate::core::{GramMatrix, KernelError, Result};
use crate::kernel::Kernel;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds dense Gram matrices for a borrowed kernel
pub struct GramMatrixBuilder<'k, K: Kernel> {
    kernel: &'k K,
}

impl<'k, K: Kernel> GramMatrixBuilder<'k, K> {
    /// Create a builder around `kernel`
    pub fn new(kernel: &'k K) -> Self {
        Self { kernel }
    }

    /// Compute the n×m matrix M[i][j] = K(x[i], y[j])
    ///
    /// When `y` is `None` the batch is compared against itself and the
    /// result is n×n. Every row of both batches must have the same length;
    /// otherwise no matrix is produced.
    pub fn build<R>(&self, x: &[R], y: Option<&[R]>) -> Result<GramMatrix>
    where
        R: AsRef<[f64]> + Sync,
    {
        let y = y.unwrap_or(x);
        let (rows, cols) = (x.len(), y.len());

        if rows == 0 || cols == 0 {
            return Ok(GramMatrix::zeros(rows, cols));
        }

        let n_modes = check_dimensions(x, y)?;
        debug!("Computing {rows}x{cols} Gram matrix over {n_modes} modes");

        let mut data = vec![0.0; rows * cols];
        self.fill(&mut data, x, y);

        Ok(GramMatrix::from_row_major(rows, cols, data))
    }

    #[cfg(not(feature = "parallel"))]
    fn fill<R: AsRef<[f64]> + Sync>(&self, data: &mut [f64], x: &[R], y: &[R]) {
        for (row, xi) in data.chunks_mut(y.len()).zip(x.iter()) {
            self.fill_row(row, xi.as_ref(), y);
        }
    }

    #[cfg(feature = "parallel")]
    fn fill<R: AsRef<[f64]> + Sync>(&self, data: &mut [f64], x: &[R], y: &[R]) {
        data.par_chunks_mut(y.len())
            .zip(x.par_iter())
            .for_each(|(row, xi)| self.fill_row(row, xi.as_ref(), y));
    }

    fn fill_row<R: AsRef<[f64]>>(&self, row: &mut [f64], xi: &[f64], y: &[R]) {
        for (cell, yj) in row.iter_mut().zip(y.iter()) {
            *cell = self.kernel.compute(xi, yj.as_ref());
        }
    }
}

/// Compute the Gram matrix of `kernel` between `x` and `y` (or `x` with itself)
pub fn gram_matrix<K, R>(kernel: &K, x: &[R], y: Option<&[R]>) -> Result<GramMatrix>
where
    K: Kernel,
    R: AsRef<[f64]> + Sync,
{
    GramMatrixBuilder::new(kernel).build(x, y)
}

/// Verify every vector in both batches has the length of the first one
///
/// Returns the shared mode count.
fn check_dimensions<R: AsRef<[f64]>>(x: &[R], y: &[R]) -> Result<usize> {
    let expected = x[0].as_ref().len();

    x.iter()
        .chain(y.iter())
        .map(|v| v.as_ref().len())
        .find(|&actual| actual != expected)
        .map_or(Ok(expected), |actual| {
            Err(KernelError::DimensionMismatch { expected, actual })
        })
}
