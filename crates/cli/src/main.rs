//! Command-line orchestrator for configuration-driven transfer jobs.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use transferctl_config::{load_dag_configuration, normalize_record, read_csv_records};
use transferctl_gcp::{RestTransferJobClient, DEFAULT_ENDPOINT};
use transferctl_jobs::{build_job_spec, submit_all, SubmitOutcome};
use transferctl_model::{ConfigRecord, JobSpec};
use transferctl_scheduler::{map_triggers, run_trigger};

#[derive(Parser, Debug)]
#[command(name = "transferctl")]
#[command(version = "0.1.0")]
#[command(about = "Provision and trigger transfer jobs between Azure Blob Storage and GCS \
                   from declarative configuration records.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create transfer jobs from a CSV configuration file
    Create {
        /// CSV file with one transfer job per row
        #[arg(short, long)]
        config: PathBuf,

        /// Project owning the transfer jobs
        #[arg(short, long)]
        project: String,

        /// Bearer token for the transfer service
        #[arg(long, env = "GCP_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,

        /// API endpoint override
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Derive and print the job specs without submitting anything
    Plan {
        /// CSV file with one transfer job per row
        #[arg(short, long)]
        config: PathBuf,

        /// Project owning the transfer jobs
        #[arg(short, long)]
        project: String,
    },

    /// Trigger declared jobs from a scheduling document
    Trigger {
        /// JSON scheduling document
        #[arg(short, long)]
        dag_config: PathBuf,

        /// Trigger only the unit with this label (default: all)
        #[arg(long)]
        job: Option<String>,

        /// Bearer token for the transfer service
        #[arg(long, env = "GCP_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,

        /// API endpoint override
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Create {
            config,
            project,
            access_token,
            endpoint,
        } => {
            let client = RestTransferJobClient::with_endpoint(endpoint, access_token);
            create(&client, &config, &project).await
        }
        Commands::Plan { config, project } => plan(&config, &project),
        Commands::Trigger {
            dag_config,
            job,
            access_token,
            endpoint,
        } => {
            let client = RestTransferJobClient::with_endpoint(endpoint, access_token);
            trigger(&client, &dag_config, job.as_deref()).await
        }
    }
}

/// Normalize every row, reporting invalid records without aborting the batch.
fn normalize_rows(
    config: &Path,
    invalid: &mut usize,
) -> anyhow::Result<Vec<ConfigRecord>> {
    let rows = read_csv_records(config)
        .with_context(|| format!("loading configuration from {}", config.display()))?;

    let mut records: Vec<ConfigRecord> = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        match normalize_record(row, idx + 1) {
            Ok(record) => records.push(record),
            Err(err) => {
                println!("Invalid record: {}", err);
                *invalid += 1;
            }
        }
    }
    Ok(records)
}

async fn create(
    client: &RestTransferJobClient,
    config: &Path,
    project: &str,
) -> anyhow::Result<()> {
    let mut invalid: usize = 0;
    let records = normalize_rows(config, &mut invalid)?;

    let specs: Vec<JobSpec> = records
        .iter()
        .map(|record| build_job_spec(record, project))
        .collect();

    let report = submit_all(client, &specs).await;

    for outcome in &report.outcomes {
        match outcome {
            SubmitOutcome::Success {
                job_id,
                job_name,
                status,
            } => println!(
                "Created transfer job {} -> {} ({})",
                job_id,
                job_name,
                status.as_deref().unwrap_or("-")
            ),
            SubmitOutcome::Failure {
                job_id,
                description,
                error,
            } => println!("Failed transfer job {} ({}): {}", job_id, description, error),
        }
    }

    let failed = report.failed() + invalid;
    let total = report.outcomes.len() + invalid;
    println!("{}/{} records succeeded", total - failed, total);

    if failed > 0 {
        bail!("{} of {} records failed", failed, total);
    }
    Ok(())
}

fn plan(config: &Path, project: &str) -> anyhow::Result<()> {
    let mut invalid: usize = 0;
    let records = normalize_rows(config, &mut invalid)?;

    for record in &records {
        let spec = build_job_spec(record, project);
        println!("{}", serde_json::to_string_pretty(&spec)?);
    }

    if invalid > 0 {
        bail!("{} invalid records", invalid);
    }
    Ok(())
}

async fn trigger(
    client: &RestTransferJobClient,
    dag_config: &Path,
    only_label: Option<&str>,
) -> anyhow::Result<()> {
    let dag = load_dag_configuration(dag_config)
        .with_context(|| format!("loading scheduling document {}", dag_config.display()))?;

    // Collisions abort before any unit is triggered.
    let identifiers = map_triggers(&dag)?;

    let selected: Vec<_> = match only_label {
        Some(label) => {
            let matched: Vec<_> = identifiers
                .iter()
                .filter(|id| id.label == label)
                .collect();
            if matched.is_empty() {
                bail!(
                    "no declared job has label `{}` (declared: {})",
                    label,
                    identifiers
                        .iter()
                        .map(|id| id.label.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            matched
        }
        None => identifiers.iter().collect(),
    };

    let mut failed: usize = 0;
    for job in &selected {
        match run_trigger(client, &dag.project_id, job).await {
            Ok(handle) => println!("Triggered {} -> {}", job.job_name, handle.name),
            Err(err) => {
                println!("Failed to trigger {}: {}", job.job_name, err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} triggers failed", failed, selected.len());
    }
    Ok(())
}
