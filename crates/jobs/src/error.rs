//! Error types for remote job-management calls.

use thiserror::Error;

/// Transport or remote-service failure during a create/run call.
///
/// Recorded per record; never aborts the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteCallError {
    /// The call never produced a well-formed response.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The remote service rejected the call. Includes the "already exists"
    /// case when re-submitting an unchanged job id.
    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },
}
