//! Case schema definitions.

use hf_grid::BoundaryTemps;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub name: String,
    /// Grid points along x
    pub nx: usize,
    /// Grid points along y
    pub ny: usize,
    /// Side length of the square domain
    pub domain_length: f64,
    /// Convergence threshold on total absolute change per sweep
    pub tolerance: f64,
    /// Sweep cap; the solver default applies when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sweeps: Option<usize>,
    pub boundary: BoundaryTemps,
}
