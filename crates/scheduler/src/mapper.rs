//! Mapping of declared job names to collision-checked scheduling handles.

use std::collections::HashMap;

use transferctl_model::{DagConfiguration, JobIdentifier};

use crate::error::IdentifierCollisionError;

/// Derive the scheduling label for a remote job name.
///
/// Takes the final `/`-separated segment and replaces every character outside
/// `[A-Za-z0-9_]` with `_`. Total and deterministic: the same job name always
/// yields the same label, and the label is always legal as a scheduling-unit
/// identifier.
pub fn sanitize_label(job_name: &str) -> String {
    let segment: &str = job_name.rsplit('/').next().unwrap_or(job_name);
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Map the declared job list to one `JobIdentifier` per job.
///
/// Label derivation must be injective over the declared jobs: two distinct
/// names collapsing to one label is a configuration error, reported before
/// any scheduling unit exists rather than silently resolved.
///
/// # Arguments
/// * `dag` - The immutable scheduling intent
///
/// # Returns
/// Identifiers in declaration order, or the first collision found.
pub fn map_triggers(
    dag: &DagConfiguration,
) -> Result<Vec<JobIdentifier>, IdentifierCollisionError> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    let mut identifiers: Vec<JobIdentifier> = Vec::with_capacity(dag.transfer_jobs.len());

    for job_name in &dag.transfer_jobs {
        let label: String = sanitize_label(job_name);

        if let Some(first) = claimed.insert(label.clone(), job_name) {
            return Err(IdentifierCollisionError {
                label,
                first: first.to_string(),
                second: job_name.clone(),
            });
        }

        identifiers.push(JobIdentifier {
            job_name: job_name.clone(),
            label,
        });
    }

    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use transferctl_model::Schedule;

    fn dag_with_jobs(jobs: &[&str]) -> DagConfiguration {
        DagConfiguration {
            project_id: "my-project".into(),
            transfer_jobs: jobs.iter().map(|j| j.to_string()).collect(),
            dag_id: "azure_to_gcs".into(),
            description: "".into(),
            schedule: Schedule::Manual,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            tags: vec![],
        }
    }

    #[test]
    fn test_sanitize_replaces_illegal_characters() {
        assert_eq!(sanitize_label("transferJobs/My-Job.01"), "My_Job_01");
    }

    #[test]
    fn test_sanitize_keeps_clean_names_unchanged() {
        assert_eq!(sanitize_label("transferJobs/clean_job"), "clean_job");
    }

    #[test]
    fn test_sanitize_uses_final_path_segment() {
        assert_eq!(sanitize_label("a/b/c.d"), "c_d");
        assert_eq!(sanitize_label("no-slash"), "no_slash");
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        let name = "transferJobs/Job.With Spaces-and.dots";
        assert_eq!(sanitize_label(name), sanitize_label(name));
    }

    #[test]
    fn test_map_triggers_preserves_declaration_order() {
        let dag = dag_with_jobs(&["transferJobs/b", "transferJobs/a"]);

        let ids = map_triggers(&dag).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].job_name, "transferJobs/b");
        assert_eq!(ids[0].label, "b");
        assert_eq!(ids[1].label, "a");
    }

    #[test]
    fn test_collision_is_reported_before_any_unit_exists() {
        let dag = dag_with_jobs(&["transferJobs/a.b", "transferJobs/a_b"]);

        let err = map_triggers(&dag).unwrap_err();
        assert_eq!(err.label, "a_b");
        assert_eq!(err.first, "transferJobs/a.b");
        assert_eq!(err.second, "transferJobs/a_b");
    }

    #[test]
    fn test_distinct_labels_do_not_collide() {
        let dag = dag_with_jobs(&["transferJobs/a", "transferJobs/b", "transferJobs/a2"]);
        assert_eq!(map_triggers(&dag).unwrap().len(), 3);
    }
}
