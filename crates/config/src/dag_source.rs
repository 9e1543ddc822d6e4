//! JSON configuration source for scheduling intent.
//!
//! One structured document describes the scheduling graph: project id,
//! the transfer jobs to trigger, interval-or-manual sentinel, start date,
//! and tags. The document is loaded exactly once by an explicit call at
//! orchestrator initialization; the returned `DagConfiguration` is immutable.
//!
//! Several lenient shapes are accepted, matching what operators actually put
//! in these documents:
//!
//! - a top-level array means "take the first element"
//! - `TRANSFER_JOBS` may be one string or a list of strings
//! - `TAGS` may be a list or one comma-separated string
//! - `SCHEDULE_INTERVAL` of `""`, `"NONE"`, or null means manually triggered
//! - `START_DATE` accepts `%m/%d/%Y` and `%Y-%m-%d`

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use transferctl_model::{DagConfiguration, Schedule};

use crate::error::ConfigSourceError;

const KEY_PROJECT_ID: &str = "PROJECT_ID";
const KEY_TRANSFER_JOBS: &str = "TRANSFER_JOBS";
const KEY_DAG_ID: &str = "DAG_ID";
const KEY_DESCRIPTION: &str = "DESCRIPTION";
const KEY_SCHEDULE_INTERVAL: &str = "SCHEDULE_INTERVAL";
const KEY_START_DATE: &str = "START_DATE";
const KEY_TAGS: &str = "TAGS";

/// Load the scheduling configuration from a JSON document.
///
/// # Arguments
/// * `path` - JSON file holding one scheduling document (or an array whose
///   first element is one)
///
/// # Returns
/// The immutable scheduling intent, or a `ConfigSourceError` naming the
/// missing key or unparseable value.
pub fn load_dag_configuration(path: &Path) -> Result<DagConfiguration, ConfigSourceError> {
    let text: String =
        fs::read_to_string(path).map_err(|e| ConfigSourceError::from_io(path.display().to_string(), e))?;

    let value: Value = serde_json::from_str(&text).map_err(|e| ConfigSourceError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_dag_document(value, path)
}

/// Parse an already-deserialized scheduling document.
fn parse_dag_document(value: Value, path: &Path) -> Result<DagConfiguration, ConfigSourceError> {
    let value: Value = match value {
        Value::Array(items) => items.into_iter().next().ok_or_else(|| ConfigSourceError::Parse {
            path: path.display().to_string(),
            message: "document is an empty array".into(),
        })?,
        other => other,
    };

    let doc = value.as_object().ok_or_else(|| ConfigSourceError::Parse {
        path: path.display().to_string(),
        message: "document is not a JSON object".into(),
    })?;

    Ok(DagConfiguration {
        project_id: required_string(doc, KEY_PROJECT_ID)?,
        transfer_jobs: string_or_list(doc.get(KEY_TRANSFER_JOBS)),
        dag_id: required_string(doc, KEY_DAG_ID)?,
        description: optional_string(doc, KEY_DESCRIPTION),
        schedule: parse_schedule(doc.get(KEY_SCHEDULE_INTERVAL))?,
        start_date: parse_start_date(&required_string(doc, KEY_START_DATE)?)?,
        tags: list_or_comma_string(doc.get(KEY_TAGS)),
    })
}

fn required_string(
    doc: &serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<String, ConfigSourceError> {
    match doc.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(other) if !other.is_null() => Err(ConfigSourceError::InvalidValue {
            key,
            value: other.to_string(),
            message: "expected a non-empty string".into(),
        }),
        _ => Err(ConfigSourceError::MissingKey { key }),
    }
}

fn optional_string(doc: &serde_json::Map<String, Value>, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Accept one string or a list of strings.
fn string_or_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Accept a list of strings or one comma-separated string.
fn list_or_comma_string(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Map the interval value to a schedule, treating ""/"NONE"/null as manual.
fn parse_schedule(value: Option<&Value>) -> Result<Schedule, ConfigSourceError> {
    match value {
        None | Some(Value::Null) => Ok(Schedule::Manual),
        Some(Value::String(s)) if s.is_empty() || s == "NONE" => Ok(Schedule::Manual),
        Some(Value::String(s)) => Ok(Schedule::Cron(s.clone())),
        Some(other) => Err(ConfigSourceError::InvalidValue {
            key: KEY_SCHEDULE_INTERVAL,
            value: other.to_string(),
            message: "expected a string or null".into(),
        }),
    }
}

/// Parse the start date, trying `%m/%d/%Y` first, then `%Y-%m-%d`.
fn parse_start_date(raw: &str) -> Result<NaiveDate, ConfigSourceError> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|e| ConfigSourceError::InvalidValue {
            key: KEY_START_DATE,
            value: raw.to_string(),
            message: e.to_string(),
        })
}
