//! Error types for configuration handling.

use thiserror::Error;

/// A mandatory field is missing or empty in one configuration record.
///
/// Fatal to that record only; the batch continues with the remaining records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("record {position}: mandatory field `{field}` is missing or empty")]
pub struct ValidationError {
    /// The missing field's key in the configuration source.
    pub field: &'static str,
    /// 1-based position of the offending record.
    pub position: usize,
}

impl ValidationError {
    pub fn new(field: &'static str, position: usize) -> Self {
        Self { field, position }
    }
}

/// The configuration source is unreachable or malformed.
///
/// Fatal to the whole run; no remote call is attempted after one of these.
#[derive(Debug, Error, Clone)]
pub enum ConfigSourceError {
    /// Source could not be read at all.
    #[error("cannot read config source {path}: {message}")]
    Io { path: String, message: String },

    /// Source was read but could not be parsed.
    #[error("malformed config source {path}: {message}")]
    Parse { path: String, message: String },

    /// A required key is absent from the scheduling document.
    #[error("config document is missing required key `{key}`")]
    MissingKey { key: &'static str },

    /// A key is present but its value cannot be interpreted.
    #[error("config key `{key}` has invalid value `{value}`: {message}")]
    InvalidValue {
        key: &'static str,
        value: String,
        message: String,
    },
}

impl ConfigSourceError {
    /// Create an Io error from std::io::Error.
    pub fn from_io(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
