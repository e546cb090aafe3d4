use crate::HfError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn nearly_equal(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() <= eps
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, for quantities like lengths and
/// convergence thresholds where zero is as invalid as a negative value.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, HfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HfError::NonPositive { what, value: v })
    }
}
