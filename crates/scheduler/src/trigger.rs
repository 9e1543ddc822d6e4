//! The trigger action bound to each scheduling unit.

use tracing::info;

use transferctl_jobs::{RemoteCallError, TransferJobClient};
use transferctl_model::{JobIdentifier, OperationHandle};

/// Trigger one transfer run of the identified job.
///
/// This is the body of the scheduling unit labelled with `job.label`: it
/// retains no state between invocations and is safe to re-run. Whether two
/// concurrent runs of the same job are allowed is the remote service's
/// concern, not this function's.
///
/// # Arguments
/// * `client` - Remote job-management client
/// * `project_id` - Project owning the job
/// * `job` - The scheduling handle produced by the mapper
///
/// # Returns
/// The asynchronous operation handle reported by the remote service.
pub async fn run_trigger<C>(
    client: &C,
    project_id: &str,
    job: &JobIdentifier,
) -> Result<OperationHandle, RemoteCallError>
where
    C: TransferJobClient + ?Sized,
{
    let handle: OperationHandle = client.run_job(project_id, &job.job_name).await?;

    info!(
        task = %job.label,
        "triggered job: {}, operation: {}",
        job.job_name,
        handle.name
    );

    Ok(handle)
}
