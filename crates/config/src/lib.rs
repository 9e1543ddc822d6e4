//! Configuration handling for the transfer job orchestrator.
//!
//! This crate turns external configuration into typed values:
//!
//! - **Normalizer** - one raw key/value row into a validated `ConfigRecord`,
//!   with trimming, defaults, and present/absent tracking for optional fields
//! - **CSV source** - job-creation rows read from a CSV file
//! - **DAG source** - the scheduling document read from a JSON file
//!
//! Record-scoped problems surface as `ValidationError` (that record only);
//! source-scoped problems surface as `ConfigSourceError` (whole run aborts).

mod csv_source;
mod dag_source;
mod error;
mod normalize;

pub use csv_source::read_csv_records;
pub use dag_source::load_dag_configuration;
pub use error::{ConfigSourceError, ValidationError};
pub use normalize::{
    normalize_record, KEY_AZURE_CLIENT_ID, KEY_AZURE_CONTAINER_NAME, KEY_AZURE_STORAGE_ACCOUNT,
    KEY_AZURE_TENANT_ID, KEY_DESCRIPTION, KEY_DEST_PREFIX, KEY_GCS_BUCKET_NAME, KEY_JOB_ID,
    KEY_PRIVATE_NETWORK_SERVICE, KEY_SOURCE_PREFIX, MANDATORY_KEYS,
};
