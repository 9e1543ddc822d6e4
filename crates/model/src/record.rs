//! Normalized configuration records.

/// Resource-name prefix for transfer jobs in the remote API.
pub const TRANSFER_JOB_PREFIX: &str = "transferJobs/";

/// One logical transfer intent, produced by the config normalizer.
///
/// Mandatory fields are guaranteed non-empty and trimmed. Optional fields are
/// `None` when the configuration source supplied nothing (or only whitespace)
/// for them; downstream builders must omit the corresponding keys entirely
/// rather than encode empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    /// 1-based ordinal of this record in the configuration source.
    pub position: usize,
    /// Caller-chosen job id; becomes the last segment of the remote job name.
    pub job_id: String,
    /// Sink bucket in GCS.
    pub gcs_bucket: String,
    /// Azure storage account holding the source container.
    pub azure_storage_account: String,
    /// Source container name.
    pub azure_container: String,
    /// Federated-identity client id (app registration). Opaque to this system.
    pub azure_client_id: String,
    /// Federated-identity tenant id. Opaque to this system.
    pub azure_tenant_id: String,
    /// Private Service Connect endpoint, only for private-network transfers.
    pub private_network_service: Option<String>,
    /// Include-prefix filter on source objects.
    pub source_prefix: Option<String>,
    /// Path under the sink bucket to write into.
    pub dest_prefix: Option<String>,
    /// Human label; defaulted from the record position when not supplied.
    pub description: String,
}

impl ConfigRecord {
    /// Derive the full remote resource name for this record's job.
    pub fn job_name(&self) -> String {
        format!("{}{}", TRANSFER_JOB_PREFIX, self.job_id)
    }
}
