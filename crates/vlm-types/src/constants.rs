// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical and numerical constants shared across the solver crates.

/// Default downstream extent of the frozen wake, as a multiple of span.
/// Empirical stand-in for an infinite trailing vortex; kept configurable
/// because no convergence analysis backs the value.
pub const DEFAULT_WAKE_OFFSET: f64 = 300.0;

/// ISA sea-level air density [kg/m^3].
pub const RHO_SEA_LEVEL: f64 = 1.225;

/// Thin-airfoil lift-curve slope [1/rad], the high-aspect-ratio limit
/// the solver is validated against.
pub const THIN_AIRFOIL_LIFT_SLOPE: f64 = 2.0 * std::f64::consts::PI;
