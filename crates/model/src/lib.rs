//! Data model for the transfer job orchestrator.
//!
//! This crate provides the typed entities shared across all transferctl crates:
//!
//! - **ConfigRecord** - One normalized transfer intent from the configuration source
//! - **JobSpec** - The canonical, API-ready transfer job description
//! - **DagConfiguration** - Immutable scheduling intent loaded once at startup
//! - **JobIdentifier** - A scheduler-facing handle with a sanitized label
//!
//! All serializable types use the wire casing of the remote job-management
//! API, so `serde_json::to_value` on a `JobSpec` yields the request body as-is.

mod dag;
mod record;
mod spec;

pub use dag::{DagConfiguration, JobIdentifier, Schedule};
pub use record::{ConfigRecord, TRANSFER_JOB_PREFIX};
pub use spec::{
    AzureBlobSource, CreatedJob, FederatedIdentityConfig, GcsSink, JobSpec, JobStatus,
    ObjectConditions, OperationHandle, TransferOptions, TransferSpec,
};
