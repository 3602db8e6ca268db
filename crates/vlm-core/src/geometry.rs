// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wing surface discretization.
//!
//! Divides the planform into an m x n grid of quadrilateral panels from
//! closed-form chord/sweep/dihedral relations, and places one collocation
//! point per panel at 3/4 of the panel's chordwise strip, mid-span.
//!
//! Corner convention (clockwise A,B,D,C):
//!
//! ```text
//!     ^x    C --- D
//! y   |     |     |
//! <---*     A --- B
//! ```

use ndarray::{Array3, Array4};
use vlm_types::config::{MeshParams, WingParams};
use vlm_types::error::VlmResult;

/// Local chord from the linear taper law: c(y) = cr + (ct - cr)|2y/bp|.
pub fn chord_at_section(y: f64, cr: f64, ct: f64, bp: f64) -> f64 {
    cr + (ct - cr) * (2.0 * y / bp).abs()
}

/// X-coordinate of the quarter-chord line: x(y) = cr/4 + tan(theta)|y|.
pub fn quarter_chord_x(y: f64, cr: f64, theta: f64) -> f64 {
    cr / 4.0 + theta.tan() * y.abs()
}

/// Analytic planform area of the linear taper law: (cr + ct)/2 * bp.
/// The panel areas must sum to this within floating-point tolerance.
pub fn analytic_planform_area(wing: &WingParams) -> f64 {
    0.5 * (wing.cr + wing.ct) * wing.bp
}

/// Corners and collocation point of panel (i, j).
///
/// A-B is the forward segment, C-D the rear segment; the returned corner
/// order is the clockwise sequence A,B,D,C. Dihedral enters as
/// z = tan(delta)|y|.
pub fn build_panel(
    wing: &WingParams,
    mesh: &MeshParams,
    i: usize,
    j: usize,
) -> ([[f64; 3]; 4], [f64; 3]) {
    let m = mesh.m as f64;
    let dy = wing.bp / mesh.n as f64;
    let y_a = -wing.bp / 2.0 + j as f64 * dy;
    let y_b = y_a + dy;
    let y_pc = y_a + dy / 2.0;

    // chord law at the two stations and the panel midspan
    let c_ac = chord_at_section(y_a, wing.cr, wing.ct, wing.bp);
    let c_bd = chord_at_section(y_b, wing.cr, wing.ct, wing.bp);
    let c_pc = chord_at_section(y_pc, wing.cr, wing.ct, wing.bp);

    let dx_ac = c_ac / m;
    let dx_bd = c_bd / m;
    let dx_pc = c_pc / m;

    // quarter-chord x at y_a, y_b, y_pc
    let r = quarter_chord_x(y_a, wing.cr, wing.theta);
    let s = quarter_chord_x(y_b, wing.cr, wing.theta);
    let q = quarter_chord_x(y_pc, wing.cr, wing.theta);

    let i_f = i as f64;
    let x_a = (r - c_ac / 4.0) + i_f * dx_ac;
    let x_b = (s - c_bd / 4.0) + i_f * dx_bd;
    let x_c = x_a + dx_ac;
    let x_d = x_b + dx_bd;
    let x_pc = (q - c_pc / 4.0) + (i_f + 0.75) * dx_pc;

    let tan_delta = wing.delta.tan();
    let xs = [x_a, x_b, x_d, x_c];
    let ys = [y_a, y_b, y_b, y_a];

    let mut panel = [[0.0; 3]; 4];
    for k in 0..4 {
        panel[k] = [xs[k], ys[k], tan_delta * ys[k].abs()];
    }

    let pc = [x_pc, y_pc, tan_delta * y_pc.abs()];
    (panel, pc)
}

/// Construct all wing panels and collocation points.
///
/// Validates the planform and mesh before allocating anything, then
/// returns the panel corner array `[m, n, 4, 3]` and the collocation
/// point array `[m, n, 3]`.
pub fn build_wing_panels(
    wing: &WingParams,
    mesh: &MeshParams,
) -> VlmResult<(Array4<f64>, Array3<f64>)> {
    wing.validate()?;
    mesh.validate()?;

    let (m, n) = (mesh.m, mesh.n);
    let mut panels = Array4::zeros((m, n, 4, 3));
    let mut cpoints = Array3::zeros((m, n, 3));

    for i in 0..m {
        for j in 0..n {
            let (panel, pc) = build_panel(wing, mesh, i, j);
            for k in 0..4 {
                for c in 0..3 {
                    panels[[i, j, k, c]] = panel[k][c];
                }
            }
            for c in 0..3 {
                cpoints[[i, j, c]] = pc[c];
            }
        }
    }

    Ok((panels, cpoints))
}
