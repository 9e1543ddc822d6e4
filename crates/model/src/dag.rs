//! Scheduling intent and scheduler-facing job handles.

use chrono::NaiveDate;

/// When the external scheduler should trigger the declared jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Cron-like interval expression, interpreted by the external scheduler.
    Cron(String),
    /// No interval; the unit is only triggered manually.
    Manual,
}

impl Schedule {
    pub fn is_manual(&self) -> bool {
        matches!(self, Schedule::Manual)
    }
}

/// Scheduling intent, loaded once at orchestrator start and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagConfiguration {
    /// Project owning the transfer jobs.
    pub project_id: String,
    /// Full remote job names to trigger, e.g. `transferJobs/nightly-sync`.
    pub transfer_jobs: Vec<String>,
    /// Identifier of the scheduling graph itself.
    pub dag_id: String,
    /// Human description.
    pub description: String,
    /// Trigger interval or the manual sentinel.
    pub schedule: Schedule,
    /// First instant the schedule applies from.
    pub start_date: NaiveDate,
    /// Classification tags for the scheduler UI.
    pub tags: Vec<String>,
}

/// Scheduler-facing handle for one transfer job.
///
/// `label` is derived deterministically from `job_name` and contains only
/// `[A-Za-z0-9_]`, so it is always legal as a scheduling-unit identifier and
/// stable across orchestrator restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobIdentifier {
    /// Full remote job name, passed to the run-job operation.
    pub job_name: String,
    /// Sanitized short name used as the scheduling unit's label.
    pub label: String,
}
