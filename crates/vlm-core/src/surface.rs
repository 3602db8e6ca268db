// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Surface
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Panel normals and projected areas.

use ndarray::{Array2, Array3, Array4};
use vlm_math::vec3::{cross, norm, sub};

/// Unit normal per panel `[m, n, 3]`.
///
/// Normal = normalized cross product of the panel diagonals
/// (corner 2 - corner 0) x (corner 1 - corner 3). With the clockwise
/// A,B,D,C winding this points up (+z) for a flat wing.
pub fn panel_normals(wing_panels: &Array4<f64>) -> Array3<f64> {
    let shape = wing_panels.dim();
    let (m, n) = (shape.0, shape.1);
    let mut normals = Array3::zeros((m, n, 3));

    for i in 0..m {
        for j in 0..n {
            let corner = |k: usize| -> [f64; 3] {
                [
                    wing_panels[[i, j, k, 0]],
                    wing_panels[[i, j, k, 1]],
                    wing_panels[[i, j, k, 2]],
                ]
            };
            let d1 = sub(corner(2), corner(0));
            let d2 = sub(corner(1), corner(3));
            let nv = cross(d1, d2);
            let mag = norm(nv);
            for c in 0..3 {
                normals[[i, j, c]] = nv[c] / mag;
            }
        }
    }

    normals
}

/// Projected (x-y plane) panel areas `[m, n]` via the shoelace formula.
pub fn panel_areas(wing_panels: &Array4<f64>) -> Array2<f64> {
    let shape = wing_panels.dim();
    let (m, n) = (shape.0, shape.1);
    let mut areas = Array2::zeros((m, n));

    for i in 0..m {
        for j in 0..n {
            let mut d1 = 0.0;
            let mut d2 = 0.0;
            for k in 0..4 {
                // previous vertex with wraparound
                let prev = (k + 3) % 4;
                d1 += wing_panels[[i, j, k, 0]] * wing_panels[[i, j, prev, 1]];
                d2 += wing_panels[[i, j, k, 1]] * wing_panels[[i, j, prev, 0]];
            }
            areas[[i, j]] = 0.5 * (d1 - d2).abs();
        }
    }

    areas
}
