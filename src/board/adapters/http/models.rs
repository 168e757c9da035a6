//! Wire models for the remote task API.
//!
//! The API speaks camelCase JSON with uppercase status and priority strings.
//! Records that fail domain validation (unknown status, empty identifiers,
//! over-long titles) are rejected as malformed payloads rather than silently
//! coerced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{
    domain::{
        BoardDomainError, ProjectId, RemoteTaskData, Task, TaskId, TaskPriority, TaskStatus,
        TaskTitle, UserId,
    },
    ports::TaskGatewayError,
};

/// Task record as sent and received on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Server-assigned task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Uppercase status string.
    pub status: String,
    /// Uppercase priority string.
    pub priority: String,
    /// Due date, if any.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Owning project identifier.
    pub project_id: String,
    /// Assigned user identifier, if any.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest-change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Builds a wire record from a domain task.
    #[must_use]
    pub fn from_domain(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            due_date: task.due_date(),
            project_id: task.project_id().as_str().to_owned(),
            assigned_to: task.assignee().map(|user| user.as_str().to_owned()),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }

    /// Converts a wire record into a domain task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Payload`] when any field fails domain
    /// validation.
    pub fn into_domain(self) -> Result<Task, TaskGatewayError> {
        let status =
            TaskStatus::try_from(self.status.as_str()).map_err(|err| payload(&err.to_string()))?;
        let priority = TaskPriority::try_from(self.priority.as_str())
            .map_err(|err| payload(&err.to_string()))?;
        Ok(Task::from_remote(RemoteTaskData {
            id: TaskId::new(self.id).map_err(domain_payload)?,
            title: TaskTitle::new(self.title).map_err(domain_payload)?,
            description: self.description,
            status,
            priority,
            due_date: self.due_date,
            project_id: ProjectId::new(self.project_id).map_err(domain_payload)?,
            assignee: self
                .assigned_to
                .map(UserId::new)
                .transpose()
                .map_err(domain_payload)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}

/// Status-only patch body used for board moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    /// Uppercase status string.
    pub status: String,
}

impl StatusPatch {
    /// Builds a status patch for the given destination column.
    #[must_use]
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status: status.as_str().to_owned(),
        }
    }
}

/// Full-field patch body used for edit-form updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// Task title.
    pub title: String,
    /// Task description, if any.
    pub description: Option<String>,
    /// Uppercase status string.
    pub status: String,
    /// Uppercase priority string.
    pub priority: String,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Owning project identifier.
    pub project_id: String,
    /// Assigned user identifier, if any.
    pub assigned_to: Option<String>,
}

impl TaskPatch {
    /// Builds a full-field patch from a domain task.
    #[must_use]
    pub fn from_domain(task: &Task) -> Self {
        Self {
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            due_date: task.due_date(),
            project_id: task.project_id().as_str().to_owned(),
            assigned_to: task.assignee().map(|user| user.as_str().to_owned()),
        }
    }
}

fn payload(message: &str) -> TaskGatewayError {
    TaskGatewayError::Payload(message.to_owned())
}

fn domain_payload(err: BoardDomainError) -> TaskGatewayError {
    TaskGatewayError::Payload(err.to_string())
}
