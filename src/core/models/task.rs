use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::status::StatusKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Compared against the status *name*, see [`StatusKey`].
    pub status_id: StatusKey,
    /// `None` when the backend sent no usable priority; rendered neutral.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<i32>,
    pub project_id: String,
    #[serde(default)]
    pub sprint_id: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    pub reporter_id: String,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub actual_hours: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Accepts a missing, null or non-integer priority instead of rejecting the
// whole task list.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .and_then(|p| i32::try_from(p).ok()))
}

impl Task {
    /// Builds a local draft used for optimistic inserts until the server copy
    /// comes back from `POST /tasks`.
    pub fn draft(draft: &NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: format!("local-{}", Uuid::new_v4()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status_id: draft.status_id.clone(),
            priority: Some(draft.priority),
            project_id: draft.project_id.clone(),
            sprint_id: draft.sprint_id.clone(),
            assignee_id: draft.assignee_id.clone(),
            reporter_id: draft.reporter_id.clone(),
            estimated_hours: draft.estimated_hours,
            actual_hours: None,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_local(&self) -> bool {
        Self::is_local_id(&self.id)
    }

    /// Ids of drafts that have not been created server-side yet.
    pub fn is_local_id(id: &str) -> bool {
        id.starts_with("local-")
    }

    pub fn update_status(&mut self, status: StatusKey) {
        self.status_id = status;
        self.updated_at = Utc::now();
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status_id: StatusKey,
    pub priority: i32,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    pub reporter_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Partial body of `PUT /tasks/:id`; unset fields are left untouched server-side.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<StatusKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl TaskPatch {
    pub fn status(status: StatusKey) -> Self {
        Self { status_id: Some(status), ..Self::default() }
    }
}
