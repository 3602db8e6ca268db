// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared array bundles produced by the solver pipeline.
//!
//! Array shapes follow the lattice convention: chordwise index i in
//! [0, m), spanwise index j in [0, n), panel corners in clockwise
//! A,B,D,C order, coordinates (x, y, z) last.

use ndarray::{Array1, Array2, Array3, Array4};

/// Discretized lifting surface: everything the influence assembly needs.
///
/// - `panels`: wing panel corners `[m, n, 4, 3]`
/// - `cpoints`: collocation points at 3/4-chord `[m, n, 3]`
/// - `vortex_panels`: bound vortex rings at 1/4..5/4-chord `[m, n, 4, 3]`
/// - `normals`: unit panel normals `[m, n, 3]`
/// - `areas`: projected planform panel areas `[m, n]`
#[derive(Debug, Clone)]
pub struct WingGeometry {
    pub panels: Array4<f64>,
    pub cpoints: Array3<f64>,
    pub vortex_panels: Array4<f64>,
    pub normals: Array3<f64>,
    pub areas: Array2<f64>,
}

/// Per-panel aerodynamic loads and integrated coefficients.
#[derive(Debug, Clone)]
pub struct AeroDistributions {
    /// Incremental lift per panel [N], shape `[m, n]`.
    pub dl: Array2<f64>,
    /// Pressure contribution dL/S per panel [Pa], shape `[m, n]`.
    pub dp: Array2<f64>,
    /// Local lift coefficient per panel, shape `[m, n]`.
    pub cl: Array2<f64>,
    /// Total wing lift coefficient.
    pub cl_wing: f64,
    /// Spanwise lift-coefficient distribution, shape `[n]`.
    pub cl_span: Array1<f64>,
}

/// Result of a full case solve.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub case_name: String,
    pub distributions: AeroDistributions,
    pub solve_time_ms: f64,
}
