//! Storage Transfer Service backend for the job-management client trait.

mod client;

pub use client::{RestTransferJobClient, DEFAULT_ENDPOINT};
