//! Canonical transfer job specification and remote API response entities.
//!
//! `JobSpec` mirrors the `transferJobs` entity of the remote job-management
//! API. Every field present on a value is meant to be sent: optional fields
//! carry `skip_serializing_if` so that an absent value produces no key at all,
//! never an explicit null. The remote API treats an explicit empty/null
//! optional field as a validation error distinct from a genuinely absent one.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a transfer job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Enabled,
    Disabled,
    Deleted,
}

/// Canonical, API-ready transfer job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    /// Full resource name: `transferJobs/{job_id}`.
    pub name: String,
    /// Human description, including the caller-chosen custom id.
    pub description: String,
    /// Always `Enabled` for newly built specs.
    pub status: JobStatus,
    /// Owning project id.
    pub project_id: String,
    /// Source, filter, sink, and options.
    pub transfer_spec: TransferSpec,
}

impl JobSpec {
    /// The caller-chosen job id (last segment of the resource name).
    pub fn custom_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Nested source/filter/sink/options structure of a job spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSpec {
    pub azure_blob_storage_data_source: AzureBlobSource,
    pub object_conditions: ObjectConditions,
    pub gcs_data_sink: GcsSink,
    pub transfer_options: TransferOptions,
}

/// Azure Blob Storage source descriptor using workload identity federation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBlobSource {
    pub storage_account: String,
    pub container: String,
    /// Replaces SAS-token credentials.
    pub federated_identity_config: FederatedIdentityConfig,
    /// Only present when the transfer uses Private Service Connect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_network_service: Option<String>,
}

/// Federated-identity reference. Opaque to this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedIdentityConfig {
    pub client_id: String,
    pub tenant_id: String,
}

/// Object filter for the source.
///
/// `include_prefixes` is either empty (match all objects) or a single-element
/// list. A list containing an empty string would mean "exclude everything"
/// on the remote side and must never be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectConditions {
    #[serde(default)]
    pub include_prefixes: Vec<String>,
}

/// GCS sink descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsSink {
    pub bucket_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Transfer options. Overwriting existing sink objects is disallowed as a
/// fixed policy so that re-running a job cannot silently replace data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptions {
    pub overwrite_objects_already_existing_in_sink: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            overwrite_objects_already_existing_in_sink: false,
        }
    }
}

/// Remote response to a create-job call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedJob {
    /// Resource name assigned (echoed) by the remote service.
    pub name: String,
    /// Status reported by the remote service, if any.
    pub status: Option<String>,
}

/// Handle for the asynchronous operation started by a run-job call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationHandle {
    /// Operation resource name, e.g. `transferOperations/{id}`.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_spec() -> JobSpec {
        JobSpec {
            name: "transferJobs/job-1".into(),
            description: "Transfer Job 1 | Custom ID: job-1".into(),
            status: JobStatus::Enabled,
            project_id: "my-project".into(),
            transfer_spec: TransferSpec {
                azure_blob_storage_data_source: AzureBlobSource {
                    storage_account: "acct".into(),
                    container: "container".into(),
                    federated_identity_config: FederatedIdentityConfig {
                        client_id: "client".into(),
                        tenant_id: "tenant".into(),
                    },
                    private_network_service: None,
                },
                object_conditions: ObjectConditions {
                    include_prefixes: vec![],
                },
                gcs_data_sink: GcsSink {
                    bucket_name: "sink".into(),
                    path: None,
                },
                transfer_options: TransferOptions::default(),
            },
        }
    }

    #[test]
    fn test_absent_optionals_produce_no_keys() {
        let json = serde_json::to_string(&minimal_spec()).unwrap();

        assert!(!json.contains("privateNetworkService"));
        assert!(!json.contains("\"path\""));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_wire_casing() {
        let value = serde_json::to_value(minimal_spec()).unwrap();

        assert_eq!(value["status"], "ENABLED");
        assert_eq!(value["projectId"], "my-project");
        let source = &value["transferSpec"]["azureBlobStorageDataSource"];
        assert_eq!(source["storageAccount"], "acct");
        assert_eq!(source["federatedIdentityConfig"]["clientId"], "client");
        assert_eq!(
            value["transferSpec"]["transferOptions"]["overwriteObjectsAlreadyExistingInSink"],
            false
        );
    }

    #[test]
    fn test_present_optionals_serialize() {
        let mut spec = minimal_spec();
        spec.transfer_spec
            .azure_blob_storage_data_source
            .private_network_service = Some("psc-endpoint".into());
        spec.transfer_spec.gcs_data_sink.path = Some("landing/".into());

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value["transferSpec"]["azureBlobStorageDataSource"]["privateNetworkService"],
            "psc-endpoint"
        );
        assert_eq!(value["transferSpec"]["gcsDataSink"]["path"], "landing/");
    }

    #[test]
    fn test_custom_id() {
        assert_eq!(minimal_spec().custom_id(), "job-1");
    }
}
