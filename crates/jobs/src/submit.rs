//! Batch submission with per-record failure isolation.
//!
//! Specs are submitted strictly in order, one remote call at a time, and each
//! call's outcome is recorded before the next call begins. A failure on one
//! record never prevents the remaining records from being attempted; the
//! report always holds exactly one outcome per input spec, in input order.

use tracing::{error, info};

use transferctl_model::JobSpec;

use crate::error::RemoteCallError;
use crate::traits::TransferJobClient;

/// Outcome of one create-job attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The remote service accepted the spec.
    Success {
        /// Caller-chosen job id.
        job_id: String,
        /// Resource name reported by the remote service.
        job_name: String,
        /// Status reported by the remote service, if any.
        status: Option<String>,
    },
    /// The call failed; the batch continued.
    Failure {
        /// Caller-chosen job id.
        job_id: String,
        /// Record description, for traceability in operator output.
        description: String,
        /// Captured error detail.
        error: RemoteCallError,
    },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }

    /// Caller-chosen job id this outcome belongs to.
    pub fn job_id(&self) -> &str {
        match self {
            SubmitOutcome::Success { job_id, .. } => job_id,
            SubmitOutcome::Failure { job_id, .. } => job_id,
        }
    }
}

/// Aggregated result of one batch submission.
#[derive(Debug, Clone, Default)]
pub struct SubmitReport {
    /// One outcome per input spec, in input order.
    pub outcomes: Vec<SubmitOutcome>,
}

impl SubmitReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Submit every spec via one create-job call each.
///
/// Partial success is expected and normal; this function always completes
/// and never propagates a per-record error past the batch boundary.
///
/// # Arguments
/// * `client` - Remote job-management client
/// * `specs` - Ordered batch of specs to create
pub async fn submit_all<C>(client: &C, specs: &[JobSpec]) -> SubmitReport
where
    C: TransferJobClient + ?Sized,
{
    let mut outcomes: Vec<SubmitOutcome> = Vec::with_capacity(specs.len());

    for spec in specs {
        info!(job = %spec.name, "creating transfer job: {}", spec.description);

        match client.create_job(spec).await {
            Ok(created) => {
                info!(
                    job = %created.name,
                    status = created.status.as_deref().unwrap_or("-"),
                    "transfer job created"
                );
                outcomes.push(SubmitOutcome::Success {
                    job_id: spec.custom_id().to_string(),
                    job_name: created.name,
                    status: created.status,
                });
            }
            Err(err) => {
                error!(job = %spec.name, "failed to create transfer job: {}", err);
                outcomes.push(SubmitOutcome::Failure {
                    job_id: spec.custom_id().to_string(),
                    description: spec.description.clone(),
                    error: err,
                });
            }
        }
    }

    SubmitReport { outcomes }
}
