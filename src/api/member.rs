//! Project Member Commands

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::Member;

#[derive(Serialize)]
pub struct AddMemberArgs<'a> {
    pub email: &'a str,
    pub project_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct MemberAdded {
    pub user_id: u32,
}

#[derive(Deserialize)]
struct MembersResponse {
    #[serde(default)]
    members: Vec<Member>,
}

impl ApiClient {
    pub async fn list_members(&self, project_id: u32) -> ApiResult<Vec<Member>> {
        let response: MembersResponse = self.get(&format!("/project_member/{}", project_id)).await?;
        Ok(response.members)
    }

    /// Add an existing user to a project by email
    pub async fn add_member(&self, args: &AddMemberArgs<'_>) -> ApiResult<MemberAdded> {
        self.post("/project_member", args).await
    }

    pub async fn remove_member(&self, project_id: u32, user_id: u32) -> ApiResult<()> {
        self.delete(&format!("/project_member/{}/{}", project_id, user_id)).await
    }

    /// Drop the current user's own membership
    pub async fn leave_project(&self, project_id: u32) -> ApiResult<()> {
        self.delete(&format!("/project_member/{}", project_id)).await
    }
}
