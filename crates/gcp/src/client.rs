//! REST implementation of the job-management client.

use serde_json::{json, Value};
use tracing::debug;

use transferctl_jobs::{prune_nulls, RemoteCallError, TransferJobClient};
use transferctl_model::{CreatedJob, JobSpec, OperationHandle};

/// Production endpoint of the Storage Transfer Service v1 API.
pub const DEFAULT_ENDPOINT: &str = "https://storagetransfer.googleapis.com";

/// TransferJobClient implementation against the Storage Transfer Service
/// REST API.
///
/// Credential acquisition stays outside this crate: the caller supplies an
/// already-acquired bearer token. The endpoint can be overridden to point
/// at a local test server.
pub struct RestTransferJobClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl RestTransferJobClient {
    /// Create a client against the production endpoint.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token for the transfer service scope
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, access_token)
    }

    /// Create a client against a specific endpoint (for testing).
    ///
    /// # Arguments
    /// * `endpoint` - Base URL, no trailing slash
    /// * `access_token` - Bearer token
    pub fn with_endpoint(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_token: access_token.into(),
        }
    }

    /// Issue one POST and decode the JSON response body.
    async fn post_json(&self, url: String, body: &Value) -> Result<Value, RemoteCallError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteCallError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let text: String = response.text().await.map_err(|e| RemoteCallError::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(RemoteCallError::Service {
                status: status.as_u16(),
                message: service_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| RemoteCallError::Transport {
            message: format!("invalid response body: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl TransferJobClient for RestTransferJobClient {
    async fn create_job(&self, spec: &JobSpec) -> Result<CreatedJob, RemoteCallError> {
        let body: Value = serde_json::to_value(spec).map_err(|e| RemoteCallError::Transport {
            message: format!("cannot serialize job spec: {}", e),
        })?;
        let body: Value = prune_nulls(body);

        debug!(job = %spec.name, "POST /v1/transferJobs");
        let response: Value = self
            .post_json(format!("{}/v1/transferJobs", self.endpoint), &body)
            .await?;

        Ok(CreatedJob {
            name: response
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(&spec.name)
                .to_string(),
            status: response
                .get("status")
                .and_then(Value::as_str)
                .map(String::from),
        })
    }

    async fn run_job(
        &self,
        project_id: &str,
        job_name: &str,
    ) -> Result<OperationHandle, RemoteCallError> {
        let body = json!({ "projectId": project_id });

        debug!(job = %job_name, "POST /v1/{{jobName}}:run");
        let response: Value = self
            .post_json(format!("{}/v1/{}:run", self.endpoint, job_name), &body)
            .await?;

        let name = response
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RemoteCallError::Transport {
                message: "run response carries no operation name".into(),
            })?;

        Ok(OperationHandle {
            name: name.to_string(),
        })
    }
}

/// Extract the service's error message from a response body.
///
/// Error bodies look like `{"error": {"message": "...", ...}}`; anything
/// else is passed through verbatim.
fn service_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}
