//! hf-results: persisted solver runs.
//!
//! A run is a manifest (JSON) plus the converged temperature grid as a
//! flat text file, one grid row per line. Run IDs are content hashes of
//! the case, so re-solving an unchanged case lands on the same ID.

pub mod error;
pub mod hash;
pub mod store;
pub mod types;

pub use error::{ResultsError, ResultsResult};
pub use hash::compute_run_id;
pub use store::RunStore;
pub use types::{RunId, RunManifest};
