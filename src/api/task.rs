//! Task Commands

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::{Task, TaskDetails, TaskStatus};

// ========================
// Argument Structs
// ========================

/// Server-side board filter, sent as the query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelRef {
    pub label_id: u32,
}

#[derive(Serialize)]
pub struct TaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: TaskStatus,
    pub sprint_id: Option<u32>,
    pub assigned_to: Option<u32>,
    pub project_id: u32,
    /// Replaces the task's labels on update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LabelRef>>,
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn list_tasks(&self, project_id: u32, filter: TaskFilter) -> ApiResult<Vec<Task>> {
        self.get_with_query(&format!("/task/by_project/{}", project_id), &filter)
            .await
    }

    /// Task plus assignable users, project sprints and labels
    pub async fn task_details(&self, task_id: u32) -> ApiResult<TaskDetails> {
        self.get(&format!("/task/details/{}", task_id)).await
    }

    pub async fn create_task(&self, args: &TaskArgs<'_>) -> ApiResult<()> {
        self.post::<_, serde::de::IgnoredAny>("/task", args)
            .await
            .map(|_| ())
    }

    pub async fn update_task(&self, task_id: u32, args: &TaskArgs<'_>) -> ApiResult<()> {
        self.put(&format!("/task/{}", task_id), args).await
    }

    pub async fn delete_task(&self, task_id: u32) -> ApiResult<()> {
        self.delete(&format!("/task/{}", task_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use leptos_session::Pipeline;
    use reqwest::Method;
    use serde_json::json;

    fn board_query(filter: TaskFilter) -> Option<String> {
        let api = ApiClient::new(&AppConfig::with_base_url("http://localhost:5000"), Pipeline::new());
        let request = api
            .build::<_, ()>(Method::GET, "/task/by_project/3", Some(&filter), None)
            .unwrap();
        assert_eq!(request.url().path(), "/task/by_project/3");
        request.url().query().map(str::to_string)
    }

    #[test]
    fn test_filter_query_string() {
        assert_eq!(board_query(TaskFilter::default()), None);
        assert_eq!(
            board_query(TaskFilter { label_id: Some(8), sprint_id: None }).as_deref(),
            Some("label_id=8")
        );
        assert_eq!(
            board_query(TaskFilter { label_id: None, sprint_id: Some(2) }).as_deref(),
            Some("sprint_id=2")
        );
        assert_eq!(
            board_query(TaskFilter { label_id: Some(8), sprint_id: Some(2) }).as_deref(),
            Some("label_id=8&sprint_id=2")
        );
    }

    #[test]
    fn test_new_task_payload() {
        let args = TaskArgs {
            title: "Fix login",
            description: "Cookie not sent",
            status: TaskStatus::Todo,
            sprint_id: None,
            assigned_to: Some(4),
            project_id: 1,
            labels: None,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "title": "Fix login",
                "description": "Cookie not sent",
                "status": "todo",
                "sprint_id": null,
                "assigned_to": 4,
                "project_id": 1
            })
        );
    }

    #[test]
    fn test_update_payload_carries_labels() {
        let args = TaskArgs {
            title: "Fix login",
            description: "Cookie not sent",
            status: TaskStatus::Done,
            sprint_id: Some(2),
            assigned_to: None,
            project_id: 1,
            labels: Some(vec![LabelRef { label_id: 5 }, LabelRef { label_id: 6 }]),
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["labels"], json!([{ "label_id": 5 }, { "label_id": 6 }]));
        assert_eq!(value["status"], "done");
    }
}
