//! Deterministic construction of job specs from normalized records.

use serde_json::Value;
use transferctl_model::{
    AzureBlobSource, ConfigRecord, FederatedIdentityConfig, GcsSink, JobSpec, JobStatus,
    ObjectConditions, TransferOptions, TransferSpec,
};

/// Build the canonical job spec for one normalized record.
///
/// Pure and deterministic; there are no failure modes beyond what the
/// normalizer already rejected. Optional nested keys are only populated when
/// the record marked them present, and the include-prefix list is either
/// empty (match all objects) or a single-element list - never a list holding
/// an empty string, which the remote side reads as "exclude everything".
///
/// # Arguments
/// * `record` - Normalized transfer intent
/// * `project_id` - Project owning the job
pub fn build_job_spec(record: &ConfigRecord, project_id: &str) -> JobSpec {
    let include_prefixes: Vec<String> = record.source_prefix.iter().cloned().collect();

    JobSpec {
        name: record.job_name(),
        description: format!("{} | Custom ID: {}", record.description, record.job_id),
        status: JobStatus::Enabled,
        project_id: project_id.to_string(),
        transfer_spec: TransferSpec {
            azure_blob_storage_data_source: AzureBlobSource {
                storage_account: record.azure_storage_account.clone(),
                container: record.azure_container.clone(),
                federated_identity_config: FederatedIdentityConfig {
                    client_id: record.azure_client_id.clone(),
                    tenant_id: record.azure_tenant_id.clone(),
                },
                private_network_service: record.private_network_service.clone(),
            },
            object_conditions: ObjectConditions { include_prefixes },
            gcs_data_sink: GcsSink {
                bucket_name: record.gcs_bucket.clone(),
                path: record.dest_prefix.clone(),
            },
            // Fixed policy: never overwrite existing sink objects.
            transfer_options: TransferOptions::default(),
        },
    }
}

/// Recursively remove null-valued entries from a serialized request body.
///
/// The typed spec already omits absent fields, so this is a structural safety
/// net for any transitively-introduced null, not the primary mechanism.
pub fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, prune_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(prune_nulls)
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_record() -> ConfigRecord {
        ConfigRecord {
            position: 1,
            job_id: "job-1".into(),
            gcs_bucket: "sink-bucket".into(),
            azure_storage_account: "acct".into(),
            azure_container: "container".into(),
            azure_client_id: "client-id".into(),
            azure_tenant_id: "tenant-id".into(),
            private_network_service: None,
            source_prefix: None,
            dest_prefix: None,
            description: "Transfer Job 1".into(),
        }
    }

    #[test]
    fn test_derived_fields() {
        let spec = build_job_spec(&minimal_record(), "my-project");

        assert_eq!(spec.name, "transferJobs/job-1");
        assert_eq!(spec.description, "Transfer Job 1 | Custom ID: job-1");
        assert_eq!(spec.status, JobStatus::Enabled);
        assert_eq!(spec.project_id, "my-project");
    }

    #[test]
    fn test_absent_prefix_yields_empty_filter() {
        let spec = build_job_spec(&minimal_record(), "p");

        // Empty list, never a list containing an empty string.
        assert!(spec.transfer_spec.object_conditions.include_prefixes.is_empty());
    }

    #[test]
    fn test_present_prefix_yields_single_element_filter() {
        let mut record = minimal_record();
        record.source_prefix = Some("in/".into());

        let spec = build_job_spec(&record, "p");
        assert_eq!(
            spec.transfer_spec.object_conditions.include_prefixes,
            vec!["in/"]
        );
    }

    #[test]
    fn test_absent_optionals_stay_absent() {
        let spec = build_job_spec(&minimal_record(), "p");

        assert_eq!(
            spec.transfer_spec
                .azure_blob_storage_data_source
                .private_network_service,
            None
        );
        assert_eq!(spec.transfer_spec.gcs_data_sink.path, None);
    }

    #[test]
    fn test_overwrite_is_always_disallowed() {
        let mut record = minimal_record();
        record.source_prefix = Some("in/".into());
        record.dest_prefix = Some("out/".into());
        record.private_network_service = Some("psc".into());

        // No configuration path reaches transfer options.
        let spec = build_job_spec(&record, "p");
        assert!(
            !spec
                .transfer_spec
                .transfer_options
                .overwrite_objects_already_existing_in_sink
        );
    }

    #[test]
    fn test_builder_is_deterministic() {
        let record = minimal_record();

        let first = serde_json::to_string(&build_job_spec(&record, "p")).unwrap();
        let second = serde_json::to_string(&build_job_spec(&record, "p")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_prune_nulls_is_recursive() {
        let pruned = prune_nulls(json!({
            "keep": "value",
            "drop": null,
            "nested": { "inner_drop": null, "inner_keep": 1 },
            "list": [null, {"deep": null}, "x"]
        }));

        assert_eq!(
            pruned,
            json!({
                "keep": "value",
                "nested": { "inner_keep": 1 },
                "list": [{}, "x"]
            })
        );
    }

    #[test]
    fn test_serialized_spec_has_no_nulls_to_prune() {
        let value = serde_json::to_value(build_job_spec(&minimal_record(), "p")).unwrap();
        assert_eq!(prune_nulls(value.clone()), value);
    }
}
