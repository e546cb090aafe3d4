//! hf-core: stable foundation for heatfield.
//!
//! Contains:
//! - numeric (Real + float guards shared by the solver and validation)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{HfError, HfResult};
pub use numeric::*;
