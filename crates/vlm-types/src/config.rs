// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable parameter records defining a steady VLM case.
//!
//! A case is a wing planform, a lattice resolution, and a flight
//! condition. Angles are radians throughout.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WAKE_OFFSET;
use crate::error::{VlmError, VlmResult};

/// Wing planform definition.
///
/// Chord tapers linearly from `cr` at the root to `ct` at the tip; the
/// quarter-chord line sweeps back at `theta` and the surface tilts out
/// of plane at the dihedral angle `delta`. The planform is symmetric
/// about the root (y = 0).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WingParams {
    /// Root chord [m].
    pub cr: f64,
    /// Tip chord [m].
    pub ct: f64,
    /// Full span [m].
    pub bp: f64,
    /// Quarter-chord sweep angle [rad].
    pub theta: f64,
    /// Dihedral angle [rad].
    pub delta: f64,
}

impl WingParams {
    pub fn validate(&self) -> VlmResult<()> {
        for (name, v) in [
            ("cr", self.cr),
            ("ct", self.ct),
            ("bp", self.bp),
            ("theta", self.theta),
            ("delta", self.delta),
        ] {
            if !v.is_finite() {
                return Err(VlmError::InvalidGeometry(format!(
                    "wing parameter {name} must be finite, got {v}"
                )));
            }
        }
        if self.cr <= 0.0 || self.ct <= 0.0 || self.bp <= 0.0 {
            return Err(VlmError::InvalidGeometry(format!(
                "chords and span must be > 0: cr={}, ct={}, bp={}",
                self.cr, self.ct, self.bp
            )));
        }
        Ok(())
    }
}

/// Lattice resolution: `m` chordwise by `n` spanwise panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeshParams {
    pub m: usize,
    pub n: usize,
}

impl MeshParams {
    pub fn validate(&self) -> VlmResult<()> {
        if self.m == 0 || self.n == 0 {
            return Err(VlmError::InvalidMesh {
                m: self.m,
                n: self.n,
            });
        }
        Ok(())
    }

    /// Total panel count m*n, the dimension of the influence matrix.
    pub fn panel_count(&self) -> usize {
        self.m * self.n
    }
}

/// Freestream flight condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightConditions {
    /// Freestream speed [m/s].
    pub ui: f64,
    /// Angle of attack [rad].
    pub alpha: f64,
    /// Air density [kg/m^3].
    pub rho: f64,
}

impl FlightConditions {
    pub fn validate(&self) -> VlmResult<()> {
        if !self.ui.is_finite() || self.ui <= 0.0 {
            return Err(VlmError::InvalidGeometry(format!(
                "freestream speed ui must be finite and > 0, got {}",
                self.ui
            )));
        }
        if !self.rho.is_finite() || self.rho <= 0.0 {
            return Err(VlmError::InvalidGeometry(format!(
                "air density rho must be finite and > 0, got {}",
                self.rho
            )));
        }
        if !self.alpha.is_finite() {
            return Err(VlmError::InvalidGeometry(format!(
                "angle of attack must be finite, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Freestream velocity vector ui * (cos alpha, 0, sin alpha).
    pub fn freestream(&self) -> [f64; 3] {
        [
            self.ui * self.alpha.cos(),
            0.0,
            self.ui * self.alpha.sin(),
        ]
    }
}

/// Top-level case configuration, 1:1 with the JSON case files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub case_name: String,
    pub wing: WingParams,
    pub mesh: MeshParams,
    pub flight: FlightConditions,
    /// Downstream wake extent as a multiple of span.
    #[serde(default = "default_wake_offset")]
    pub wake_offset: f64,
}

fn default_wake_offset() -> f64 {
    DEFAULT_WAKE_OFFSET
}

impl CaseConfig {
    /// Load a case from a JSON file.
    pub fn from_file(path: &str) -> VlmResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> VlmResult<()> {
        self.wing.validate()?;
        self.mesh.validate()?;
        self.flight.validate()?;
        if !self.wake_offset.is_finite() || self.wake_offset <= 0.0 {
            return Err(VlmError::InvalidGeometry(format!(
                "wake offset must be finite and > 0, got {}",
                self.wake_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/vlm-types/ at compile time,
    /// so go up 2 levels to reach the workspace root.
    fn workspace_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn case_path(relative: &str) -> String {
        workspace_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_rectangular_wing_case() {
        let cfg = CaseConfig::from_file(&case_path("cases/rectangular_wing.json")).unwrap();
        assert_eq!(cfg.case_name, "Rectangular-Wing-AR10");
        assert!((cfg.wing.cr - 1.0).abs() < 1e-12);
        assert!((cfg.wing.bp - 10.0).abs() < 1e-12);
        assert_eq!(cfg.mesh.m, 4);
        assert_eq!(cfg.mesh.n, 30);
        // wake_offset absent from the file: serde default applies
        assert!((cfg.wake_offset - DEFAULT_WAKE_OFFSET).abs() < 1e-12);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = CaseConfig::from_file(&case_path("cases/rectangular_wing.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: CaseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.case_name, cfg2.case_name);
        assert_eq!(cfg.mesh.m, cfg2.mesh.m);
        assert!((cfg.wing.ct - cfg2.wing.ct).abs() < 1e-15);
        assert!((cfg.flight.alpha - cfg2.flight.alpha).abs() < 1e-15);
    }

    #[test]
    fn test_mesh_rejects_zero_panels() {
        assert!(MeshParams { m: 0, n: 4 }.validate().is_err());
        assert!(MeshParams { m: 4, n: 0 }.validate().is_err());
        assert!(MeshParams { m: 1, n: 1 }.validate().is_ok());
    }

    #[test]
    fn test_wing_rejects_degenerate_planform() {
        let mut wing = WingParams {
            cr: 1.0,
            ct: 1.0,
            bp: 10.0,
            theta: 0.0,
            delta: 0.0,
        };
        wing.validate().unwrap();
        wing.cr = 0.0;
        assert!(wing.validate().is_err());
        wing.cr = 1.0;
        wing.bp = -5.0;
        assert!(wing.validate().is_err());
        wing.bp = f64::NAN;
        assert!(wing.validate().is_err());
    }

    #[test]
    fn test_flight_rejects_nonphysical_freestream() {
        let flight = FlightConditions {
            ui: 0.0,
            alpha: 0.0,
            rho: 1.225,
        };
        assert!(flight.validate().is_err());
        let flight = FlightConditions {
            ui: 50.0,
            alpha: 0.0,
            rho: -1.0,
        };
        assert!(flight.validate().is_err());
    }

    #[test]
    fn test_freestream_vector() {
        let flight = FlightConditions {
            ui: 50.0,
            alpha: 0.0,
            rho: 1.0,
        };
        let u = flight.freestream();
        assert!((u[0] - 50.0).abs() < 1e-12);
        assert!(u[1].abs() < 1e-15);
        assert!(u[2].abs() < 1e-15);

        let flight = FlightConditions {
            ui: 50.0,
            alpha: std::f64::consts::FRAC_PI_2,
            rho: 1.0,
        };
        let u = flight.freestream();
        assert!(u[0].abs() < 1e-9);
        assert!((u[2] - 50.0).abs() < 1e-9);
    }
}
