//! Sprint Commands

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::Sprint;

#[derive(Serialize)]
pub struct CreateSprintArgs<'a> {
    pub name: &'a str,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub project_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct SprintCreated {
    pub sprint_id: u32,
}

/// Read an `<input type="date">` value; blank or malformed means no date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl ApiClient {
    pub async fn list_sprints(&self, project_id: u32) -> ApiResult<Vec<Sprint>> {
        self.get(&format!("/sprint/by_project/{}", project_id)).await
    }

    pub async fn create_sprint(&self, args: &CreateSprintArgs<'_>) -> ApiResult<SprintCreated> {
        self.post("/sprint", args).await
    }

    pub async fn delete_sprint(&self, sprint_id: u32) -> ApiResult<()> {
        self.delete(&format!("/sprint/{}", sprint_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-06-03"), NaiveDate::from_ymd_opt(2024, 6, 3));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("06/03/2024"), None);
    }

    #[test]
    fn test_missing_dates_serialize_as_null() {
        let args = CreateSprintArgs {
            name: "Sprint 2",
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3),
            end_date: None,
            project_id: 5,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "name": "Sprint 2", "start_date": "2024-06-03", "end_date": null, "project_id": 5 })
        );
    }
}
