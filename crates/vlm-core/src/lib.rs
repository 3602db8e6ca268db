// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Vlm Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Steady vortex-lattice solver pipeline.
//!
//! Geometry discretization, bound-vortex rings, steady wake, Biot-Savart
//! influence assembly, flow-tangency solve, and load post-processing.

pub mod aero;
pub mod geometry;
pub mod influence;
pub mod simulation;
pub mod solver;
pub mod surface;
pub mod vortex;
pub mod wake;
