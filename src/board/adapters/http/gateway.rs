//! HTTP implementation of the `TaskGateway` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::models::{StatusPatch, TaskPatch, TaskRecord};
use crate::board::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskGateway, TaskGatewayError, TaskGatewayResult},
};

/// Gateway for a REST task API (`GET/POST /tasks`, `PATCH/DELETE
/// /tasks/{id}`).
#[derive(Debug, Clone)]
pub struct HttpTaskGateway {
    http: Client,
    base_url: String,
}

impl HttpTaskGateway {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a gateway for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Transport`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> TaskGatewayResult<Self> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("corkboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TaskGatewayError::transport)?;
        let raw = base_url.into();
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_owned(),
            http,
        })
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: &TaskId) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }
}

/// Converts a non-success response into the HTTP error variant.
async fn status_error(response: Response) -> TaskGatewayError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    TaskGatewayError::Http { status, body }
}

/// Resolves a response to itself on success or the mapped error otherwise.
async fn ensure_success(response: Response) -> TaskGatewayResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(status_error(response).await)
    }
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn list_tasks(&self) -> TaskGatewayResult<Vec<Task>> {
        let response = self
            .http
            .get(self.tasks_url())
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        let records = ensure_success(response)
            .await?
            .json::<Vec<TaskRecord>>()
            .await
            .map_err(|err| TaskGatewayError::Payload(err.to_string()))?;
        records
            .into_iter()
            .map(TaskRecord::into_domain)
            .collect::<TaskGatewayResult<Vec<_>>>()
    }

    async fn create_task(&self, task: &Task) -> TaskGatewayResult<Task> {
        let response = self
            .http
            .post(self.tasks_url())
            .json(&TaskRecord::from_domain(task))
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        let record = ensure_success(response)
            .await?
            .json::<TaskRecord>()
            .await
            .map_err(|err| TaskGatewayError::Payload(err.to_string()))?;
        record.into_domain()
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskGatewayResult<()> {
        let response = self
            .http
            .patch(self.task_url(id))
            .json(&StatusPatch::new(status))
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn update_task(&self, task: &Task) -> TaskGatewayResult<()> {
        let response = self
            .http
            .patch(self.task_url(task.id()))
            .json(&TaskPatch::from_domain(task))
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskGatewayResult<()> {
        let response = self
            .http
            .delete(self.task_url(id))
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        ensure_success(response).await.map(|_| ())
    }
}
