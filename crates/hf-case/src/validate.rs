//! Case validation logic.
//!
//! Every precondition is checked here, before a field is allocated or a
//! solver is configured: the grid crate re-checks dimensions and the
//! solver re-checks the tolerance, but a case that passes validation
//! never trips those.

use crate::schema::CaseDef;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid dimension: {axis} = {points} (at least 2 points per axis)")]
    InvalidDimension { axis: &'static str, points: usize },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid sweep cap: 0 (at least one sweep is required)")]
    ZeroSweepCap,

    #[error("Empty case name")]
    EmptyName,
}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if case.nx < 2 {
        return Err(ValidationError::InvalidDimension {
            axis: "nx",
            points: case.nx,
        });
    }
    if case.ny < 2 {
        return Err(ValidationError::InvalidDimension {
            axis: "ny",
            points: case.ny,
        });
    }

    check_finite_positive("domain_length", case.domain_length)?;
    check_finite_positive("tolerance", case.tolerance)?;

    if case.max_sweeps == Some(0) {
        return Err(ValidationError::ZeroSweepCap);
    }

    if !case.boundary.all_finite() {
        return Err(ValidationError::InvalidValue {
            field: "boundary",
            value: f64::NAN,
            reason: "all four edge temperatures must be finite",
        });
    }

    Ok(())
}

fn check_finite_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be > 0",
        });
    }
    Ok(())
}
