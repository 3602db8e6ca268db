// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Influence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Biot-Savart influence assembly.
//!
//! Entry (p, q) of the influence matrix is the normal velocity induced at
//! collocation point p by the unit-strength vortex ring q. Panels are
//! flattened row-major: p = i * n + j. The wake couples each collocation
//! point to the trailing-row ring of its spanwise column, so its
//! contribution lands only in the last n columns.
//!
//! The segment kernel divides by |r1 x r2|^2. Collocation points sit at
//! 3/4-chord while filaments lie on the 1/4 and 5/4 lines, so the
//! denominator never vanishes for lattices built by this crate; a
//! degenerate caller-supplied geometry surfaces as a non-finite matrix
//! and is rejected before the solve.

use ndarray::{Array2, Array3, Array4};
use vlm_math::vec3::{cross, dot, norm, scale, sub};
use vlm_types::error::{VlmError, VlmResult};

const FOUR_PI: f64 = 4.0 * std::f64::consts::PI;

/// Velocity induced at `point` by a unit-strength vortex ring.
///
/// Straight-filament Biot-Savart, summed over the 4 segments in fixed
/// corner order (summation order is part of the reproducibility
/// contract). With r1, r2 the vectors from `point` to the segment ends:
///
///   v = -1/(4 pi) * (r1 x r2)/|r1 x r2|^2 * [(r2 - r1) . (r1/|r1| - r2/|r2|)]
pub fn ring_induced_velocity(ring: &[[f64; 3]; 4], point: [f64; 3]) -> [f64; 3] {
    let mut r = [[0.0; 3]; 4];
    for k in 0..4 {
        r[k] = sub(ring[k], point);
    }

    let mut vel = [0.0; 3];
    for k in 0..4 {
        let r1 = r[k];
        let r2 = r[(k + 1) % 4];
        let cp = cross(r1, r2);
        let cp_sq = dot(cp, cp);
        let d1 = sub(r2, r1);
        let d2 = sub(scale(r1, 1.0 / norm(r1)), scale(r2, 1.0 / norm(r2)));
        let coeff = -dot(d1, d2) / (FOUR_PI * cp_sq);
        vel[0] += coeff * cp[0];
        vel[1] += coeff * cp[1];
        vel[2] += coeff * cp[2];
    }
    vel
}

fn ring_at(panels: &Array4<f64>, i: usize, j: usize) -> [[f64; 3]; 4] {
    let mut ring = [[0.0; 3]; 4];
    for k in 0..4 {
        for c in 0..3 {
            ring[k][c] = panels[[i, j, k, c]];
        }
    }
    ring
}

fn point_at(cpoints: &Array3<f64>, i: usize, j: usize) -> [f64; 3] {
    [
        cpoints[[i, j, 0]],
        cpoints[[i, j, 1]],
        cpoints[[i, j, 2]],
    ]
}

fn normal_at(normals: &Array3<f64>, i: usize, j: usize) -> [f64; 3] {
    [
        normals[[i, j, 0]],
        normals[[i, j, 1]],
        normals[[i, j, 2]],
    ]
}

/// Wing self-influence `[m*n, m*n]`: every ring against every
/// collocation point.
pub fn wing_influence_matrix(
    vortex_panels: &Array4<f64>,
    cpoints: &Array3<f64>,
    normals: &Array3<f64>,
) -> Array2<f64> {
    let shape = vortex_panels.dim();
    let (m, n) = (shape.0, shape.1);
    let mn = m * n;
    let mut aic = Array2::zeros((mn, mn));

    for pi in 0..m {
        for pj in 0..n {
            let p = pi * n + pj;
            let point = point_at(cpoints, pi, pj);
            let nv = normal_at(normals, pi, pj);
            for qi in 0..m {
                for qj in 0..n {
                    let q = qi * n + qj;
                    let ring = ring_at(vortex_panels, qi, qj);
                    let vel = ring_induced_velocity(&ring, point);
                    aic[[p, q]] = dot(vel, nv);
                }
            }
        }
    }

    aic
}

/// Wake influence `[m*n, m*n]`, nonzero only in the last n columns.
///
/// Wake panel j trails the last-row ring of spanwise column j, so its
/// induced velocity adds to the coefficient of that ring's circulation.
pub fn wake_influence_matrix(
    cpoints: &Array3<f64>,
    wake: &Array3<f64>,
    normals: &Array3<f64>,
) -> Array2<f64> {
    let shape = cpoints.dim();
    let (m, n) = (shape.0, shape.1);
    let mn = m * n;
    let mut aic_w = Array2::zeros((mn, mn));

    for pi in 0..m {
        for pj in 0..n {
            let p = pi * n + pj;
            let point = point_at(cpoints, pi, pj);
            let nv = normal_at(normals, pi, pj);
            for j in 0..n {
                let mut ring = [[0.0; 3]; 4];
                for k in 0..4 {
                    for c in 0..3 {
                        ring[k][c] = wake[[j, k, c]];
                    }
                }
                let vel = ring_induced_velocity(&ring, point);
                aic_w[[p, (m - 1) * n + j]] = dot(vel, nv);
            }
        }
    }

    aic_w
}

/// Complete influence matrix: wing self-influence plus wake superposition.
///
/// Rejects a non-finite result before the expensive solve; a silent NaN
/// here would corrupt every downstream coefficient without signal.
pub fn influence_matrix(
    vortex_panels: &Array4<f64>,
    wake: &Array3<f64>,
    cpoints: &Array3<f64>,
    normals: &Array3<f64>,
) -> VlmResult<Array2<f64>> {
    let mut aic = wing_influence_matrix(vortex_panels, cpoints, normals);
    let aic_w = wake_influence_matrix(cpoints, wake, normals);
    aic += &aic_w;

    if aic.iter().any(|v| !v.is_finite()) {
        return Err(VlmError::Numerical(
            "influence matrix contains non-finite entries (degenerate vortex geometry)"
                .to_string(),
        ));
    }
    Ok(aic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_wing_panels;
    use crate::surface::panel_normals;
    use crate::vortex::build_wing_vortex_panels;
    use crate::wake::build_steady_wake;
    use vlm_types::config::{FlightConditions, MeshParams, WingParams};

    fn flat_wing(m: usize, n: usize) -> (Array4<f64>, Array3<f64>, Array3<f64>, Array4<f64>) {
        let wing = WingParams {
            cr: 1.0,
            ct: 1.0,
            bp: 10.0,
            theta: 0.0,
            delta: 0.0,
        };
        let (panels, cpoints) = build_wing_panels(&wing, &MeshParams { m, n }).unwrap();
        let normals = panel_normals(&panels);
        let vortex = build_wing_vortex_panels(&panels);
        (panels, cpoints, normals, vortex)
    }

    #[test]
    fn test_ring_induces_downwash_at_own_cpoint() {
        // A flat ring ahead of its collocation point induces downwash
        // (negative z velocity) for positive circulation.
        let (_, cpoints, _, vortex) = flat_wing(1, 1);
        let ring = ring_at(&vortex, 0, 0);
        let point = point_at(&cpoints, 0, 0);
        let vel = ring_induced_velocity(&ring, point);
        assert!(vel[2] < 0.0, "expected downwash, got {}", vel[2]);
        assert!(vel[0].abs() < 1e-12);
        assert!(vel[1].abs() < 1e-12);
    }

    #[test]
    fn test_induced_velocity_decays_with_distance() {
        let (_, _, _, vortex) = flat_wing(1, 1);
        let ring = ring_at(&vortex, 0, 0);
        let near = ring_induced_velocity(&ring, [2.0, 0.0, 0.0]);
        let far = ring_induced_velocity(&ring, [20.0, 0.0, 0.0]);
        assert!(norm(far) < norm(near) * 1e-2);
    }

    #[test]
    fn test_wing_matrix_diagonal_dominates_same_row() {
        // Self-influence is the strongest coupling within a spanwise row.
        let (_, cpoints, normals, vortex) = flat_wing(1, 5);
        let aic = wing_influence_matrix(&vortex, &cpoints, &normals);
        for p in 0..5 {
            for q in 0..5 {
                if q != p {
                    assert!(
                        aic[[p, p]].abs() > aic[[p, q]].abs(),
                        "diagonal not dominant at p={p}, q={q}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_wake_matrix_sparsity() {
        let (m, n) = (3, 4);
        let (_, cpoints, normals, vortex) = flat_wing(m, n);
        let flight = FlightConditions {
            ui: 50.0,
            alpha: 0.05,
            rho: 1.0,
        };
        let wake = build_steady_wake(&flight, &vortex, 300.0);
        let aic_w = wake_influence_matrix(&cpoints, &wake, &normals);

        let mn = m * n;
        for p in 0..mn {
            // all columns before the last n are exactly zero
            for q in 0..(mn - n) {
                assert_eq!(aic_w[[p, q]], 0.0);
            }
            // wake columns actually couple
            let tail: f64 = (mn - n..mn).map(|q| aic_w[[p, q]].abs()).sum();
            assert!(tail > 0.0, "wake columns all zero for p={p}");
        }
    }

    #[test]
    fn test_full_matrix_finite_and_superposed() {
        let (m, n) = (2, 3);
        let (_, cpoints, normals, vortex) = flat_wing(m, n);
        let flight = FlightConditions {
            ui: 50.0,
            alpha: 0.02,
            rho: 1.0,
        };
        let wake = build_steady_wake(&flight, &vortex, 300.0);
        let aic = influence_matrix(&vortex, &wake, &cpoints, &normals).unwrap();
        let wing_only = wing_influence_matrix(&vortex, &cpoints, &normals);
        let wake_only = wake_influence_matrix(&cpoints, &wake, &normals);

        for p in 0..m * n {
            for q in 0..m * n {
                let sum = wing_only[[p, q]] + wake_only[[p, q]];
                assert!((aic[[p, q]] - sum).abs() < 1e-15);
                assert!(aic[[p, q]].is_finite());
            }
        }
    }

    #[test]
    fn test_degenerate_geometry_rejected() {
        // Field point exactly on a filament: r1 x r2 = 0, NaN propagates,
        // and the assembler reports it instead of returning garbage.
        let (_, _, normals, vortex) = flat_wing(1, 1);
        let mut cpoints = Array3::zeros((1, 1, 3));
        // corner A of the only vortex ring
        for c in 0..3 {
            cpoints[[0, 0, c]] = vortex[[0, 0, 0, c]];
        }
        let flight = FlightConditions {
            ui: 50.0,
            alpha: 0.0,
            rho: 1.0,
        };
        let wake = build_steady_wake(&flight, &vortex, 300.0);
        let result = influence_matrix(&vortex, &wake, &cpoints, &normals);
        assert!(matches!(result, Err(VlmError::Numerical(_))));
    }
}
