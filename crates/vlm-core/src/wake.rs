// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Wake
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Frozen steady wake sheet.
//!
//! One quadrilateral per spanwise station, spanning from the trailing
//! filament of the last chordwise vortex row to a point far downstream
//! along the freestream direction. The downstream extent is
//! `offset * span`; large enough to stand in for an infinite trailing
//! vortex.

use ndarray::{Array3, Array4, Axis};
use vlm_types::config::FlightConditions;

/// Spanwise extent of a panel array along the y axis.
pub fn spanwise_extent(panels: &Array4<f64>) -> f64 {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for v in panels.index_axis(Axis(3), 1).iter() {
        y_min = y_min.min(*v);
        y_max = y_max.max(*v);
    }
    y_max - y_min
}

/// Build the flat wake sheet `[n, 4, 3]`.
///
/// Corners 0,1 are the trailing corners C,D of the last-row vortex ring;
/// corners 3,2 are their downstream images displaced by
/// `offset * span * (cos alpha, 0, sin alpha)`.
pub fn build_steady_wake(
    flight: &FlightConditions,
    vortex_panels: &Array4<f64>,
    offset: f64,
) -> Array3<f64> {
    let shape = vortex_panels.dim();
    let (m, n) = (shape.0, shape.1);

    let bp = spanwise_extent(vortex_panels);

    let delta = [
        offset * bp * flight.alpha.cos(),
        0.0,
        offset * bp * flight.alpha.sin(),
    ];

    let mut wake = Array3::zeros((n, 4, 3));
    for j in 0..n {
        for c in 0..3 {
            // leading edge of the wake = trailing segment C,D of row m-1
            wake[[j, 0, c]] = vortex_panels[[m - 1, j, 3, c]];
            wake[[j, 1, c]] = vortex_panels[[m - 1, j, 2, c]];
            wake[[j, 3, c]] = wake[[j, 0, c]] + delta[c];
            wake[[j, 2, c]] = wake[[j, 1, c]] + delta[c];
        }
    }

    wake
}
