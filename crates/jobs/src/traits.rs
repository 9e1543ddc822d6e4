//! Client interface for the remote job-management service.

use async_trait::async_trait;

use transferctl_model::{CreatedJob, JobSpec, OperationHandle};

use crate::error::RemoteCallError;

/// Remote job-management operations - implemented by each backend.
///
/// Both operations are fire-and-record-handle: neither waits for the
/// underlying transfer to make progress, and no retry is performed at this
/// seam. Retrying is a policy decision left to the caller or the scheduler.
#[async_trait]
pub trait TransferJobClient: Send + Sync {
    /// Register a transfer job under the spec's resource name.
    ///
    /// The caller-supplied name is the idempotency key: creating an already
    /// existing name surfaces the service's "already exists" error.
    async fn create_job(&self, spec: &JobSpec) -> Result<CreatedJob, RemoteCallError>;

    /// Start one transfer run of an existing job.
    async fn run_job(
        &self,
        project_id: &str,
        job_name: &str,
    ) -> Result<OperationHandle, RemoteCallError>;
}
