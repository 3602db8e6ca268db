// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Simulation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pipeline orchestration.
//!
//! `run_simulation` is a pure function of its three input records: all
//! arrays are built fresh per call and dropped on return, so identical
//! inputs give bit-identical outputs and independent cases can run on
//! separate threads with no coordination.

use std::time::Instant;

use vlm_types::config::{CaseConfig, FlightConditions, MeshParams, WingParams};
use vlm_types::constants::DEFAULT_WAKE_OFFSET;
use vlm_types::error::VlmResult;
use vlm_types::state::{AeroDistributions, SimulationReport, WingGeometry};

use crate::aero::aero_distributions;
use crate::geometry::build_wing_panels;
use crate::influence::influence_matrix;
use crate::solver::{freestream_rhs, solve_net_panel_circulation};
use crate::surface::{panel_areas, panel_normals};
use crate::vortex::build_wing_vortex_panels;
use crate::wake::build_steady_wake;

/// Discretize the wing: panels, collocation points, vortex rings,
/// normals, and areas in one bundle (what visualization consumers need).
pub fn build_geometry(wing: &WingParams, mesh: &MeshParams) -> VlmResult<WingGeometry> {
    let (panels, cpoints) = build_wing_panels(wing, mesh)?;
    let vortex_panels = build_wing_vortex_panels(&panels);
    let normals = panel_normals(&panels);
    let areas = panel_areas(&panels);
    Ok(WingGeometry {
        panels,
        cpoints,
        vortex_panels,
        normals,
        areas,
    })
}

/// Straight-line solver pipeline with an explicit wake offset.
///
/// Validation happens before the O((mn)^2) assembly; no partial results
/// are ever returned.
pub fn run_simulation_with_offset(
    wing: &WingParams,
    mesh: &MeshParams,
    flight: &FlightConditions,
    wake_offset: f64,
) -> VlmResult<AeroDistributions> {
    flight.validate()?;
    let geom = build_geometry(wing, mesh)?;

    let wake = build_steady_wake(flight, &geom.vortex_panels, wake_offset);
    let aic = influence_matrix(&geom.vortex_panels, &wake, &geom.cpoints, &geom.normals)?;
    let rhs = freestream_rhs(flight, &geom.normals);
    let net = solve_net_panel_circulation(aic, &rhs, mesh.m, mesh.n)?;

    Ok(aero_distributions(flight, wing, mesh, &net, &geom.areas))
}

/// Solver pipeline with the default far-wake extent.
pub fn run_simulation(
    wing: &WingParams,
    mesh: &MeshParams,
    flight: &FlightConditions,
) -> VlmResult<AeroDistributions> {
    run_simulation_with_offset(wing, mesh, flight, DEFAULT_WAKE_OFFSET)
}

/// Case-level driver around the pipeline.
pub struct SteadySolver {
    config: CaseConfig,
}

impl SteadySolver {
    pub fn new(config: CaseConfig) -> Self {
        SteadySolver { config }
    }

    /// Load a case from a JSON file.
    pub fn from_file(path: &str) -> VlmResult<Self> {
        let config = CaseConfig::from_file(path)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &CaseConfig {
        &self.config
    }

    /// Discretized surface for external consumers (plotting, export).
    pub fn geometry(&self) -> VlmResult<WingGeometry> {
        self.config.validate()?;
        build_geometry(&self.config.wing, &self.config.mesh)
    }

    /// Run the full case and wrap the distributions with timing.
    pub fn solve(&self) -> VlmResult<SimulationReport> {
        self.config.validate()?;
        let start = Instant::now();
        let distributions = run_simulation_with_offset(
            &self.config.wing,
            &self.config.mesh,
            &self.config.flight,
            self.config.wake_offset,
        )?;
        Ok(SimulationReport {
            case_name: self.config.case_name.clone(),
            distributions,
            solve_time_ms: start.elapsed().as_secs_f64() * 1e3,
        })
    }
}
