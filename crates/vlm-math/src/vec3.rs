// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Vec3
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plain `[f64; 3]` vector algebra.
//!
//! The Biot-Savart kernel evaluates millions of short vector expressions;
//! fixed-size arrays keep them allocation-free and the operation order
//! explicit.

#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_right_handed() {
        let x = [1.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0];
        let z = cross(x, y);
        assert!((z[0]).abs() < 1e-15);
        assert!((z[1]).abs() < 1e-15);
        assert!((z[2] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_cross_anticommutes() {
        let a = [1.0, 2.0, 3.0];
        let b = [-2.0, 0.5, 4.0];
        let ab = cross(a, b);
        let ba = cross(b, a);
        for k in 0..3 {
            assert!((ab[k] + ba[k]).abs() < 1e-15);
        }
    }

    #[test]
    fn test_norm_pythagorean() {
        assert!((norm([3.0, 4.0, 0.0]) - 5.0).abs() < 1e-15);
        assert!((norm([0.0, 0.0, 0.0])).abs() < 1e-15);
    }

    #[test]
    fn test_dot_orthogonal() {
        assert!(dot([1.0, 0.0, 0.0], [0.0, 5.0, 0.0]).abs() < 1e-15);
    }

    #[test]
    fn test_affine_ops() {
        let a = [1.0, -2.0, 3.0];
        let b = [0.5, 0.5, 0.5];
        let s = add(sub(a, b), b);
        for k in 0..3 {
            assert!((s[k] - a[k]).abs() < 1e-15);
        }
        let t = scale(a, 2.0);
        assert!((t[1] + 4.0).abs() < 1e-15);
    }
}
