//! Normalization of raw configuration rows into typed records.
//!
//! A raw row is a flat string key/value mapping, one per configuration record,
//! regardless of which concrete source produced it. Normalization is a pure
//! mapping: trim every textual field, reject a missing or empty mandatory
//! field, and collapse an absent or empty optional field to "not present" so
//! that downstream builders can omit it entirely.

use std::collections::HashMap;

use transferctl_model::ConfigRecord;

use crate::error::ValidationError;

/// Caller-chosen job id.
pub const KEY_JOB_ID: &str = "JOB_ID";
/// Sink bucket in GCS.
pub const KEY_GCS_BUCKET_NAME: &str = "GCS_BUCKET_NAME";
/// Azure storage account.
pub const KEY_AZURE_STORAGE_ACCOUNT: &str = "AZURE_STORAGE_ACCOUNT";
/// Azure container name.
pub const KEY_AZURE_CONTAINER_NAME: &str = "AZURE_CONTAINER_NAME";
/// Federated-identity client id.
pub const KEY_AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
/// Federated-identity tenant id.
pub const KEY_AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
/// Optional Private Service Connect endpoint.
pub const KEY_PRIVATE_NETWORK_SERVICE: &str = "PRIVATE_NETWORK_SERVICE";
/// Optional include-prefix filter on the source.
pub const KEY_SOURCE_PREFIX: &str = "SOURCE_PREFIX";
/// Optional path under the sink bucket.
pub const KEY_DEST_PREFIX: &str = "DEST_PREFIX";
/// Optional human description.
pub const KEY_DESCRIPTION: &str = "DESCRIPTION";

/// Keys that must be present and non-empty in every record.
pub const MANDATORY_KEYS: [&str; 6] = [
    KEY_JOB_ID,
    KEY_GCS_BUCKET_NAME,
    KEY_AZURE_STORAGE_ACCOUNT,
    KEY_AZURE_CONTAINER_NAME,
    KEY_AZURE_CLIENT_ID,
    KEY_AZURE_TENANT_ID,
];

/// Normalize one raw configuration row into a `ConfigRecord`.
///
/// # Arguments
/// * `raw` - Flat key/value mapping for one record
/// * `position` - 1-based ordinal of the record in its source
///
/// # Returns
/// The validated record, or a `ValidationError` naming the first mandatory
/// field that is missing or empty after trimming.
pub fn normalize_record(
    raw: &HashMap<String, String>,
    position: usize,
) -> Result<ConfigRecord, ValidationError> {
    let description: String = optional(raw, KEY_DESCRIPTION)
        .unwrap_or_else(|| format!("Transfer Job {}", position));

    Ok(ConfigRecord {
        position,
        job_id: mandatory(raw, KEY_JOB_ID, position)?,
        gcs_bucket: mandatory(raw, KEY_GCS_BUCKET_NAME, position)?,
        azure_storage_account: mandatory(raw, KEY_AZURE_STORAGE_ACCOUNT, position)?,
        azure_container: mandatory(raw, KEY_AZURE_CONTAINER_NAME, position)?,
        azure_client_id: mandatory(raw, KEY_AZURE_CLIENT_ID, position)?,
        azure_tenant_id: mandatory(raw, KEY_AZURE_TENANT_ID, position)?,
        private_network_service: optional(raw, KEY_PRIVATE_NETWORK_SERVICE),
        source_prefix: optional(raw, KEY_SOURCE_PREFIX),
        dest_prefix: optional(raw, KEY_DEST_PREFIX),
        description,
    })
}

/// Fetch a mandatory field, trimmed. Empty after trimming counts as missing.
fn mandatory(
    raw: &HashMap<String, String>,
    key: &'static str,
    position: usize,
) -> Result<String, ValidationError> {
    match raw.get(key).map(|v| v.trim()) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ValidationError::new(key, position)),
    }
}

/// Fetch an optional field, trimmed. Absent and empty both map to `None`.
fn optional(raw: &HashMap<String, String>, key: &str) -> Option<String> {
    raw.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}
