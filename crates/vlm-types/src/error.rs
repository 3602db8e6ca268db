// ─────────────────────────────────────────────────────────────────────
// SCPN Aero Lattice — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VlmError {
    #[error("Invalid mesh: m={m}, n={n} (both panel counts must be >= 1)")]
    InvalidMesh { m: usize, n: usize },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VlmResult<T> = Result<T, VlmError>;
