//! Project Commands

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::Project;

#[derive(Serialize)]
pub struct ProjectArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl ApiClient {
    /// Projects the current user is a member of
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.get("/project/mine").await
    }

    pub async fn get_project(&self, project_id: u32) -> ApiResult<Project> {
        self.get(&format!("/project/{}", project_id)).await
    }

    pub async fn create_project(&self, args: &ProjectArgs<'_>) -> ApiResult<()> {
        self.post::<_, serde::de::IgnoredAny>("/project", args)
            .await
            .map(|_| ())
    }

    pub async fn update_project(&self, project_id: u32, args: &ProjectArgs<'_>) -> ApiResult<()> {
        self.put(&format!("/project/{}", project_id), args).await
    }

    pub async fn delete_project(&self, project_id: u32) -> ApiResult<()> {
        self.delete(&format!("/project/{}", project_id)).await
    }
}
