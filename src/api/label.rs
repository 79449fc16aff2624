//! Label Commands

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::Label;

#[derive(Serialize)]
pub struct CreateLabelArgs<'a> {
    pub name: &'a str,
    pub project_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct LabelCreated {
    pub label_id: u32,
}

impl ApiClient {
    pub async fn list_labels(&self, project_id: u32) -> ApiResult<Vec<Label>> {
        self.get(&format!("/label/by_project/{}", project_id)).await
    }

    pub async fn create_label(&self, args: &CreateLabelArgs<'_>) -> ApiResult<LabelCreated> {
        self.post("/label", args).await
    }

    pub async fn delete_label(&self, label_id: u32) -> ApiResult<()> {
        self.delete(&format!("/label/{}", label_id)).await
    }
}
