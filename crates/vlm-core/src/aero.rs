// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Aero
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Load post-processing.
//!
//! Kutta-Joukowski per spanwise strip turns net circulation into
//! incremental lift, then pressure and lift-coefficient distributions
//! and the integrated wing coefficient.

use ndarray::{Array1, Array2};
use vlm_types::config::{FlightConditions, MeshParams, WingParams};
use vlm_types::state::AeroDistributions;

/// Convert net circulation `[m, n]` and panel areas `[m, n]` into the
/// aerodynamic distributions.
///
///   dL = Gamma_net * rho * ui * (bp / n)
///   dp = dL / S_panel
///   cl = dp / (1/2 rho ui^2)
///   cl_wing = sum(dL) / (1/2 rho ui^2 sum(S))
///   cl_span[j] = sum_i cl[i, j] / m
pub fn aero_distributions(
    flight: &FlightConditions,
    wing: &WingParams,
    mesh: &MeshParams,
    net_circulation: &Array2<f64>,
    areas: &Array2<f64>,
) -> AeroDistributions {
    let (m, n) = net_circulation.dim();
    let strip_width = wing.bp / mesh.n as f64;
    let q_inf = 0.5 * flight.rho * flight.ui * flight.ui;

    let dl = net_circulation.mapv(|g| g * flight.rho * flight.ui * strip_width);
    let dp = &dl / areas;
    let cl = dp.mapv(|p| p / q_inf);

    let total_lift: f64 = dl.iter().sum();
    let total_area: f64 = areas.iter().sum();
    let cl_wing = total_lift / (q_inf * total_area);

    let mut cl_span = Array1::zeros(n);
    for j in 0..n {
        let mut sum = 0.0;
        for i in 0..m {
            sum += cl[[i, j]];
        }
        cl_span[j] = sum / mesh.m as f64;
    }

    AeroDistributions {
        dl,
        dp,
        cl,
        cl_wing,
        cl_span,
    }
}
