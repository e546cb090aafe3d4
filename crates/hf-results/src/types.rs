//! Result data types.

use hf_case::CaseDef;
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub case_name: String,
    pub timestamp: String,
    pub nx: usize,
    pub ny: usize,
    pub sweeps: usize,
    pub total_error: f64,
    pub solver_version: String,
}

impl RunManifest {
    /// Manifest for a freshly converged run, stamped with the current
    /// UTC time.
    pub fn new(
        run_id: RunId,
        case: &CaseDef,
        sweeps: usize,
        total_error: f64,
        solver_version: &str,
    ) -> Self {
        Self {
            run_id,
            case_name: case.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            nx: case.nx,
            ny: case.ny,
            sweeps,
            total_error,
            solver_version: solver_version.to_string(),
        }
    }
}
