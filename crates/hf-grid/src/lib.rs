//! hf-grid: rectangular temperature field with Dirichlet boundaries.
//!
//! Owns the 2D field storage and the boundary-initialization rules. The
//! relaxation itself lives in hf-solver; this crate only guarantees that
//! a freshly initialized field satisfies the boundary invariant.

pub mod boundary;
pub mod error;
pub mod field;

pub use boundary::BoundaryTemps;
pub use error::{GridError, GridResult};
pub use field::TemperatureField;
