//! Diagnostics for Gram matrices
//!
//! A solver consuming a precomputed kernel assumes the training Gram matrix
//! is symmetric and positive semi-definite. These helpers check that and
//! compare kernels against each other.

use crate::core::{GramMatrix, KernelError, Result};

/// Check that `gram` is a valid Mercer Gram matrix within `tolerance`
///
/// The matrix must be square, finite and symmetric, and `gram + tolerance·I`
/// must admit a Cholesky factorisation.
pub fn is_positive_semidefinite(gram: &GramMatrix, tolerance: f64) -> bool {
    if !gram.is_finite() || !gram.is_symmetric(tolerance) {
        return false;
    }

    let n = gram.rows();
    let mut l = vec![0.0; n * n];

    for j in 0..n {
        let mut diag = gram.get(j, j) + tolerance;
        for k in 0..j {
            diag -= l[j * n + k] * l[j * n + k];
        }
        if diag <= 0.0 {
            return false;
        }
        let d = diag.sqrt();
        l[j * n + j] = d;

        for i in (j + 1)..n {
            let mut sum = gram.get(i, j);
            for k in 0..j {
                sum -= l[i * n + k] * l[j * n + k];
            }
            l[i * n + j] = sum / d;
        }
    }

    true
}

/// Frobenius inner product ⟨A, B⟩ = Σᵢⱼ AᵢⱼBᵢⱼ
pub fn frobenius_inner(a: &GramMatrix, b: &GramMatrix) -> Result<f64> {
    check_same_shape(a, b)?;
    Ok(a.as_slice()
        .iter()
        .zip(b.as_slice().iter())
        .map(|(x, y)| x * y)
        .sum())
}

/// Kernel alignment ⟨A, B⟩ / √(⟨A, A⟩⟨B, B⟩)
///
/// Returns 0.0 when either matrix is all zeros.
pub fn kernel_alignment(a: &GramMatrix, b: &GramMatrix) -> Result<f64> {
    let ab = frobenius_inner(a, b)?;
    let norm = (frobenius_inner(a, a)? * frobenius_inner(b, b)?).sqrt();

    if norm > 0.0 {
        Ok(ab / norm)
    } else {
        Ok(0.0)
    }
}

/// Center a square Gram matrix in feature space: HKH with H = I − 11ᵀ/n
pub fn center(gram: &GramMatrix) -> Result<GramMatrix> {
    let (rows, cols) = gram.shape();
    if rows != cols {
        return Err(KernelError::DimensionMismatch {
            expected: rows,
            actual: cols,
        });
    }
    if rows == 0 {
        return Ok(GramMatrix::zeros(0, 0));
    }

    let n = rows as f64;
    let row_means: Vec<f64> = gram.iter_rows().map(|r| r.iter().sum::<f64>() / n).collect();
    let col_means: Vec<f64> = (0..cols)
        .map(|j| (0..rows).map(|i| gram.get(i, j)).sum::<f64>() / n)
        .collect();
    let total_mean = row_means.iter().sum::<f64>() / n;

    let mut centered = GramMatrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            centered.set(i, j, gram.get(i, j) - row_means[i] - col_means[j] + total_mean);
        }
    }

    Ok(centered)
}

fn check_same_shape(a: &GramMatrix, b: &GramMatrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(KernelError::DimensionMismatch {
            expected: a.rows() * a.cols(),
            actual: b.rows() * b.cols(),
        });
    }
    Ok(())
}
