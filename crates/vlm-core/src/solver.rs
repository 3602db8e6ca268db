// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flow-tangency boundary condition and circulation solve.
//!
//! The right-hand side cancels the freestream component through each
//! panel (total normal velocity = 0). The dense solve yields gross ring
//! circulations; differencing consecutive chordwise rows converts them
//! to the net circulation each panel actually binds, since adjacent
//! rings share a filament.

use ndarray::{Array1, Array2, Array3};
use vlm_math::linalg::lu_solve;
use vlm_math::vec3::dot;
use vlm_types::config::FlightConditions;
use vlm_types::error::{VlmError, VlmResult};

/// Right-hand side of the flow-tangency system: -(n . U_inf) per panel,
/// flattened row-major to length m*n.
pub fn freestream_rhs(flight: &FlightConditions, normals: &Array3<f64>) -> Array1<f64> {
    let shape = normals.dim();
    let (m, n) = (shape.0, shape.1);
    let u = flight.freestream();

    let mut rhs = Array1::zeros(m * n);
    for i in 0..m {
        for j in 0..n {
            let nv = [
                normals[[i, j, 0]],
                normals[[i, j, 1]],
                normals[[i, j, 2]],
            ];
            rhs[i * n + j] = -dot(nv, u);
        }
    }
    rhs
}

/// Solve AIC * gamma = rhs and reshape to the (m, n) lattice.
pub fn gross_circulation(
    aic: Array2<f64>,
    rhs: &Array1<f64>,
    m: usize,
    n: usize,
) -> VlmResult<Array2<f64>> {
    if aic.nrows() != m * n {
        return Err(VlmError::Numerical(format!(
            "influence matrix dimension {} does not match lattice {}x{}",
            aic.nrows(),
            m,
            n
        )));
    }
    let gamma = lu_solve(aic, rhs)?;
    gamma
        .into_shape_with_order((m, n))
        .map_err(|e| VlmError::Numerical(format!("circulation reshape failed: {e}")))
}

/// Spanwise-columnwise chordwise differencing of gross circulation.
///
/// Row 0 has no upstream neighbor, so its net equals its gross; row i>0
/// binds only the change against row i-1.
pub fn net_circulation(gross: &Array2<f64>) -> Array2<f64> {
    let (m, n) = gross.dim();
    let mut net = Array2::zeros((m, n));
    for j in 0..n {
        net[[0, j]] = gross[[0, j]];
    }
    for i in 1..m {
        for j in 0..n {
            net[[i, j]] = gross[[i, j]] - gross[[i - 1, j]];
        }
    }
    net
}

/// Full boundary-condition solve: gross circulation then chordwise
/// differencing. This is the composition the pipeline uses.
pub fn solve_net_panel_circulation(
    aic: Array2<f64>,
    rhs: &Array1<f64>,
    m: usize,
    n: usize,
) -> VlmResult<Array2<f64>> {
    let gross = gross_circulation(aic, rhs, m, n)?;
    Ok(net_circulation(&gross))
}
