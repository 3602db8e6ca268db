// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Vortex
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bound-vortex ring panels.
//!
//! Each wing panel carries a vortex ring shifted a quarter of the local
//! chordwise strip downstream: the ring's forward segment lies on the
//! panel's 1/4-strip line and its rear segment on the 5/4 line of the
//! next strip, so the trailing segment of row i coincides with the
//! leading segment of row i+1.

use ndarray::Array4;

/// Derive the vortex ring grid `[m, n, 4, 3]` from the wing panels.
///
/// x is shifted by a quarter of the chordwise edge behind each corner,
/// y is unchanged, and z is linearly extrapolated along the original
/// chordwise edge to the 1/4 and 5/4 stations (dihedral-consistent).
pub fn build_wing_vortex_panels(wing_panels: &Array4<f64>) -> Array4<f64> {
    let shape = wing_panels.dim();
    let (m, n) = (shape.0, shape.1);
    let mut vortex = Array4::zeros((m, n, 4, 3));

    // For corner order A,B,D,C the chordwise edges are A->C (0->3)
    // and B->D (1->2); corners 0,3 shift along A->C, corners 1,2 along B->D.
    const REAR: [usize; 4] = [3, 2, 2, 3];
    const FRONT: [usize; 4] = [0, 1, 1, 0];

    for i in 0..m {
        for j in 0..n {
            for k in 0..4 {
                let dx =
                    (wing_panels[[i, j, REAR[k], 0]] - wing_panels[[i, j, FRONT[k], 0]]) / 4.0;
                vortex[[i, j, k, 0]] = wing_panels[[i, j, k, 0]] + dx;
                vortex[[i, j, k, 1]] = wing_panels[[i, j, k, 1]];
            }

            // z extrapolated to 1/4 and 5/4 of each chordwise edge
            for (front, rear) in [(0usize, 3usize), (1, 2)] {
                let z0 = wing_panels[[i, j, front, 2]];
                let dz = wing_panels[[i, j, rear, 2]] - z0;
                vortex[[i, j, front, 2]] = z0 + 0.25 * dz;
                vortex[[i, j, rear, 2]] = z0 + 1.25 * dz;
            }
        }
    }

    vortex
}
