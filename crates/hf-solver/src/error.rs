//! Error types for solver operations.

use hf_core::HfError;
use thiserror::Error;

/// Errors that can occur while relaxing a field.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid tolerance: {value} (must be > 0)")]
    InvalidTolerance { value: f64 },

    #[error("Did not converge within {sweeps} sweeps (last total error {total_error:e})")]
    NonConvergence { sweeps: usize, total_error: f64 },

    #[error("Grid error: {0}")]
    Grid(#[from] hf_grid::GridError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] HfError),
}

pub type SolverResult<T> = Result<T, SolverError>;
