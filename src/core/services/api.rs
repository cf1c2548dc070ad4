use serde::de::DeserializeOwned;

use super::http::{decode_ack, decode_envelope, execute_request, Method};
use super::session::SessionStore;
use crate::core::config::Config;
use crate::core::error::AppResult;
use crate::core::models::{Entity, NewTask, Project, Sprint, Status, Task, TaskPatch, User};

fn encode(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Resource paths, relative to `Config::api_base_url`.
pub mod paths {
    use super::encode;

    pub fn projects() -> String {
        "/projects".to_string()
    }

    pub fn project(id: &str) -> String {
        format!("/projects/{}", encode(id))
    }

    pub fn statuses(project_id: &str) -> String {
        format!("/projects/{}/statuses", encode(project_id))
    }

    pub fn sprints(project_id: &str) -> String {
        format!("/projects/{}/sprints", encode(project_id))
    }

    pub fn tasks_of(project_id: &str) -> String {
        format!("/tasks?projectId={}", encode(project_id))
    }

    pub fn tasks() -> String {
        "/tasks".to_string()
    }

    pub fn task(id: &str) -> String {
        format!("/tasks/{}", encode(id))
    }

    pub fn task_relations(id: &str) -> String {
        format!("/tasks/{}/relations", encode(id))
    }

    pub fn users() -> String {
        "/users".to_string()
    }
}

/// Everything the board page needs for one project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardData {
    pub project: Option<Project>,
    pub statuses: Vec<Status>,
    pub sprints: Vec<Sprint>,
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
}

/// Typed REST client. Cheap to clone; provided through context by `App`.
#[derive(Clone)]
pub struct ApiClient {
    config: Config,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: Config, session: SessionStore) -> Self {
        Self { config, session }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> AppResult<T> {
        let url = self.config.endpoint(path);
        let token = self.session.token();
        let raw = execute_request(method, &url, token.as_deref(), body.as_ref()).await?;
        decode_envelope(&raw).inspect_err(|e| {
            tracing::warn!(method = method.as_str(), url = %url, error = %e, "request failed");
        })
    }

    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.fetch(Method::Get, &paths::projects(), None).await
    }

    pub async fn get_project(&self, id: &str) -> AppResult<Project> {
        self.fetch(Method::Get, &paths::project(id), None).await
    }

    pub async fn list_statuses(&self, project_id: &str) -> AppResult<Vec<Status>> {
        self.fetch(Method::Get, &paths::statuses(project_id), None).await
    }

    pub async fn list_sprints(&self, project_id: &str) -> AppResult<Vec<Sprint>> {
        self.fetch(Method::Get, &paths::sprints(project_id), None).await
    }

    pub async fn list_tasks(&self, project_id: &str) -> AppResult<Vec<Task>> {
        self.fetch(Method::Get, &paths::tasks_of(project_id), None).await
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.fetch(Method::Get, &paths::users(), None).await
    }

    pub async fn list_task_relations(&self, task_id: &str) -> AppResult<Vec<Entity>> {
        self.fetch(Method::Get, &paths::task_relations(task_id), None).await
    }

    pub async fn create_task(&self, task: &NewTask) -> AppResult<Task> {
        let body = serde_json::to_value(task)?;
        let created: Task = self.fetch(Method::Post, &paths::tasks(), Some(body)).await?;
        tracing::info!(task_id = %created.id, status = %created.status_id, "task created");
        Ok(created)
    }

    pub async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> AppResult<Task> {
        let body = serde_json::to_value(patch)?;
        let updated: Task = self.fetch(Method::Put, &paths::task(task_id), Some(body)).await?;
        tracing::info!(task_id, status = %updated.status_id, "task updated");
        Ok(updated)
    }

    pub async fn delete_task(&self, task_id: &str) -> AppResult<()> {
        let url = self.config.endpoint(&paths::task(task_id));
        let token = self.session.token();
        let raw = execute_request(Method::Delete, &url, token.as_deref(), None).await?;
        decode_ack(&raw)?;
        tracing::info!(task_id, "task deleted");
        Ok(())
    }

    /// Loads the board in request order. Project name and users are optional
    /// decorations: their failure degrades to fallback labels.
    pub async fn load_board(&self, project_id: &str) -> AppResult<BoardData> {
        let statuses = self.list_statuses(project_id).await?;
        let tasks = self.list_tasks(project_id).await?;
        let sprints = self.list_sprints(project_id).await?;
        let project = self.get_project(project_id).await.ok();
        let users = self.list_users().await.unwrap_or_default();
        tracing::debug!(
            project_id,
            statuses = statuses.len(),
            tasks = tasks.len(),
            sprints = sprints.len(),
            "board loaded"
        );
        Ok(BoardData { project, statuses, sprints, tasks, users })
    }
}

#[cfg(test)]
mod tests {
    use super::paths;

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(paths::task("a b/c"), "/tasks/a%20b%2Fc");
        assert_eq!(paths::tasks_of("p&1"), "/tasks?projectId=p%261");
        assert_eq!(paths::statuses("p1"), "/projects/p1/statuses");
        assert_eq!(paths::task_relations("t1"), "/tasks/t1/relations");
    }
}
