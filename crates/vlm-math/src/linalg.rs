// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Linalg
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense direct linear solver.
//!
//! LU factorization with partial pivoting. The influence matrices this
//! solves are dense, unsymmetric, and well-conditioned for sane wing
//! geometries; a vanishing pivot means the lattice itself is degenerate
//! and is reported as a numerical error rather than a panic.

use ndarray::{Array1, Array2};
use vlm_types::error::{VlmError, VlmResult};

/// Pivot magnitudes below this are treated as singular.
const PIVOT_TOL: f64 = 1e-300;

/// Solve the dense system `A x = b` by LU with partial pivoting.
///
/// `a` is consumed by value as factorization workspace; callers keep
/// their own copy if they need the matrix afterwards.
///
/// Matches `numpy.linalg.solve` to solver precision.
pub fn lu_solve(mut a: Array2<f64>, b: &Array1<f64>) -> VlmResult<Array1<f64>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(VlmError::Numerical(format!(
            "lu_solve requires a square matrix, got {rows}x{cols}"
        )));
    }
    if b.len() != rows {
        return Err(VlmError::Numerical(format!(
            "rhs length {} does not match matrix dimension {rows}",
            b.len()
        )));
    }
    let n = rows;
    let mut x = b.clone();

    for k in 0..n {
        // Partial pivoting: largest magnitude in column k at or below row k
        let mut pivot_row = k;
        let mut pivot_mag = a[[k, k]].abs();
        for i in (k + 1)..n {
            let mag = a[[i, k]].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = i;
            }
        }
        if !pivot_mag.is_finite() || pivot_mag < PIVOT_TOL {
            return Err(VlmError::Numerical(format!(
                "singular matrix: pivot {pivot_mag:.3e} at column {k}"
            )));
        }
        if pivot_row != k {
            for j in 0..n {
                a.swap([k, j], [pivot_row, j]);
            }
            x.swap(k, pivot_row);
        }

        // Eliminate below the pivot
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            let factor = a[[i, k]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in (k + 1)..n {
                a[[i, j]] -= factor * a[[k, j]];
            }
            x[i] -= factor * x[k];
        }
    }

    // Back substitution
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum -= a[[i, j]] * x[j];
        }
        x[i] = sum / a[[i, i]];
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(VlmError::Numerical(
            "linear solve produced non-finite solution".to_string(),
        ));
    }

    Ok(x)
}
