//! Error types for trigger mapping.

use thiserror::Error;

/// Two distinct job names sanitize to the same scheduling label.
///
/// Fatal at scheduling-setup time: silently merging two jobs' triggers would
/// be a correctness bug, so no scheduling unit is created once this is
/// detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transfer jobs `{first}` and `{second}` both map to scheduling label `{label}`")]
pub struct IdentifierCollisionError {
    /// The shared label.
    pub label: String,
    /// First job name that claimed the label.
    pub first: String,
    /// Second job name that collided with it.
    pub second: String,
}
