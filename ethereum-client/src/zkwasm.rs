//! Prover task lookups against a zkWasm hub.

use crate::error::{EthereumError, Result};
use crate::verifier::VerifyError;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TaskStatus {
    Pending,
    Processing,
    Done,
    Fail,
    DryRunSuccess,
    DryRunFailed,
    Unprovable,
    Stale,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub status: TaskStatus,
    #[serde(default)]
    pub task_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskQueryResponse {
    result: TaskPage,
}

#[derive(Debug, Deserialize)]
struct TaskPage {
    #[serde(default)]
    data: Vec<TaskRecord>,
}

#[derive(Debug, Clone)]
pub struct ZkWasmClient {
    http: Client,
    base_url: Url,
}

impl ZkWasmClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Look up a prover task by id; `None` when the hub does not know it
    pub async fn query_task(&self, task_id: &str) -> Result<Option<TaskRecord>> {
        let url = format!("{}/tasks", self.base_url.as_str().trim_end_matches('/'));
        debug!("Querying zkWasm task {} at {}", task_id, url);

        let response = self.http.get(&url).query(&[("id", task_id)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EthereumError::ZkWasmApi {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TaskQueryResponse = response.json().await?;
        Ok(body.result.data.into_iter().next())
    }
}

/// Only a `Done` task has a proof worth verifying
pub fn ensure_task_ready(task_id: &str, record: Option<&TaskRecord>) -> std::result::Result<(), VerifyError> {
    match record {
        Some(record) if record.status == TaskStatus::Done => Ok(()),
        Some(record) => Err(VerifyError::NotReady(format!(
            "Task {task_id} is {}",
            record.status
        ))),
        None => Err(VerifyError::NotReady(format!("Task {task_id} not found"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: TaskStatus) -> TaskRecord {
        TaskRecord {
            status,
            task_type: None,
        }
    }

    #[test]
    fn test_parse_task_response() {
        let body = r#"{
            "success": true,
            "result": {
                "data": [{ "status": "Processing", "task_type": "Prove", "md5": "ABC" }],
                "total": 1
            }
        }"#;
        let parsed: TaskQueryResponse = serde_json::from_str(body).unwrap();
        let task = parsed.result.data.first().unwrap();
        assert_eq!(task.status, TaskStatus::Processing);
        assert_eq!(task.task_type.as_deref(), Some("Prove"));
    }

    #[test]
    fn test_unknown_status() {
        let body = r#"{ "result": { "data": [{ "status": "Archived" }] } }"#;
        let parsed: TaskQueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result.data[0].status, TaskStatus::Unknown);
    }

    #[test]
    fn test_empty_page() {
        let parsed: TaskQueryResponse = serde_json::from_str(r#"{ "result": {} }"#).unwrap();
        assert!(parsed.result.data.is_empty());
    }

    #[test]
    fn test_task_readiness() {
        assert!(ensure_task_ready("1", Some(&record(TaskStatus::Done))).is_ok());

        let err = ensure_task_ready("1", Some(&record(TaskStatus::Pending))).unwrap_err();
        assert!(err.is_not_ready());
        assert_eq!(err.to_string(), "Task 1 is Pending");

        let err = ensure_task_ready("9", None).unwrap_err();
        assert_eq!(err.to_string(), "Task 9 not found");
    }
}
