//! Gauss-Seidel sweep and convergence loop.

use crate::error::{SolverError, SolverResult};
use crate::stencil::StencilCoeffs;
use hf_core::{ensure_finite, ensure_positive};
use hf_grid::TemperatureField;
use tracing::debug;

/// Relaxation configuration.
#[derive(Debug, Clone, Copy)]
pub struct GaussSeidelConfig {
    /// Convergence threshold on the total absolute interior change of a
    /// full sweep. The loop terminates on total_error <= tolerance.
    pub tolerance: f64,
    /// Hard cap on sweeps; exceeding it is a NonConvergence error.
    pub max_sweeps: usize,
}

impl GaussSeidelConfig {
    pub const DEFAULT_MAX_SWEEPS: usize = 1_000_000;

    pub fn new(tolerance: f64) -> SolverResult<Self> {
        Self::with_max_sweeps(tolerance, Self::DEFAULT_MAX_SWEEPS)
    }

    pub fn with_max_sweeps(tolerance: f64, max_sweeps: usize) -> SolverResult<Self> {
        // tolerance <= 0 would never terminate; NaN fails this check too.
        if !(tolerance > 0.0) {
            return Err(SolverError::InvalidTolerance { value: tolerance });
        }
        Ok(Self {
            tolerance,
            max_sweeps,
        })
    }
}

/// Converged relaxation result.
#[derive(Debug, Clone)]
pub struct SteadySolution {
    /// Final temperature field
    pub field: TemperatureField,
    /// Number of completed sweeps
    pub sweeps: usize,
    /// Total absolute interior change of the final sweep
    pub total_error: f64,
}

/// One full interior pass in row-major order (i outer, j inner).
///
/// `current` is written in place. The (i-1, j) and (i, j-1) neighbors were
/// already visited this pass and are read back from `current`; the
/// (i+1, j) and (i, j+1) neighbors come from `previous`, the snapshot of
/// the last completed sweep. Boundary cells are never touched.
///
/// Returns the total absolute change against `previous` over all interior
/// cells.
pub fn sweep(
    current: &mut TemperatureField,
    previous: &TemperatureField,
    coeffs: &StencilCoeffs,
) -> f64 {
    let mut total_error = 0.0;
    for i in 1..current.nx() - 1 {
        for j in 1..current.ny() - 1 {
            let value = ((current.get(i - 1, j) + previous.get(i + 1, j)) / coeffs.dx2
                + (current.get(i, j - 1) + previous.get(i, j + 1)) / coeffs.dy2)
                / coeffs.k;
            current.set(i, j, value);
            total_error += (value - previous.get(i, j)).abs();
        }
    }
    total_error
}

/// Relax `field` until the total interior change of a sweep drops to the
/// configured tolerance, and return the final field with sweep count.
///
/// Takes ownership of the field; it comes back inside the solution once
/// the loop reaches its fixed point. The field is not observable while
/// the loop runs.
pub fn solve(
    mut field: TemperatureField,
    domain_length: f64,
    config: &GaussSeidelConfig,
) -> SolverResult<SteadySolution> {
    if !(config.tolerance > 0.0) {
        return Err(SolverError::InvalidTolerance {
            value: config.tolerance,
        });
    }
    ensure_positive(domain_length, "domain length")?;

    let coeffs = StencilCoeffs::new(domain_length, field.nx(), field.ny());
    let mut previous = field.clone();
    let mut total_error = f64::INFINITY;
    let mut sweeps = 0usize;

    while total_error > config.tolerance {
        if sweeps >= config.max_sweeps {
            return Err(SolverError::NonConvergence {
                sweeps,
                total_error,
            });
        }

        total_error = sweep(&mut field, &previous, &coeffs);
        ensure_finite(total_error, "sweep total error")?;
        sweeps += 1;
        previous.copy_from(&field);

        if sweeps % 1000 == 0 {
            debug!(sweeps, total_error, "relaxation progress");
        }
    }

    debug!(sweeps, total_error, "converged");
    Ok(SteadySolution {
        field,
        sweeps,
        total_error,
    })
}
