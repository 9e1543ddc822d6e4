//! Job spec construction and batch submission.
//!
//! This crate holds the create-side of the orchestrator:
//!
//! - **Builder** - deterministic `ConfigRecord` to `JobSpec` mapping with
//!   optional-field suppression and a null-prune safety net
//! - **Client trait** - the seam to the remote job-management service,
//!   implemented per backend
//! - **Submitter** - ordered batch submission with per-record failure
//!   isolation and an aggregated report

mod builder;
mod error;
mod submit;
mod traits;

pub use builder::{build_job_spec, prune_nulls};
pub use error::RemoteCallError;
pub use submit::{submit_all, SubmitOutcome, SubmitReport};
pub use traits::TransferJobClient;
