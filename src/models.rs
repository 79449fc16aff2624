//! Frontend Models
//!
//! Data structures matching backend JSON.

use chrono::NaiveDate;
use leptos_session::TimeoutPolicy;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_IDLE_MINUTES, MIN_IDLE_MINUTES};

/// Project visible to the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: u32,
    pub name: String,
    pub description: String,
    pub created_by: u32,
    #[serde(default)]
    pub is_owner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire value, also used as `<option>` value
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Board column heading
    pub fn column_title(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TO-DO",
            TaskStatus::InProgress => "WORK-IN-PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Task row as listed on the project board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: u32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub sprint_id: Option<u32>,
    pub assigned_to: Option<u32>,
    pub project_id: u32,
    #[serde(default)]
    pub label_names: Vec<String>,
}

/// Single task with its attached labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetail {
    pub task_id: u32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub sprint_id: Option<u32>,
    pub assigned_to: Option<u32>,
    pub project_id: u32,
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Everything the task editor needs in one response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskDetails {
    pub task: TaskDetail,
    #[serde(default)]
    pub users: Vec<Member>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    #[serde(default)]
    pub project_labels: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub label_id: u32,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub sprint_id: u32,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub project_id: Option<u32>,
}

/// Project member (or any user in the task editor's assignee list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: u32,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    #[serde(other)]
    Other,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == value).unwrap_or_default()
    }
}

/// Current user profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

/// Per-user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    pub auto_logoff_enabled: bool,
    /// Minutes
    pub auto_logoff_time: u32,
}

impl Settings {
    /// Stored minutes are not validated server-side; keep them in the slider range
    pub fn timeout_policy(&self) -> TimeoutPolicy {
        let minutes = self.auto_logoff_time.clamp(MIN_IDLE_MINUTES, MAX_IDLE_MINUTES);
        TimeoutPolicy::from_minutes(self.auto_logoff_enabled, minutes)
    }
}

/// Partial settings update; absent fields are left unchanged server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_logoff_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_logoff_time: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_to_policy() {
        let settings: Settings = serde_json::from_value(json!({
            "user_id": 3,
            "auto_logoff_time": 1,
            "auto_logoff_enabled": true,
            "theme_mode": "dark"
        }))
        .unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        let policy = settings.timeout_policy();
        assert!(policy.enabled);
        assert_eq!(policy.timeout_ms, 60_000);
    }

    #[test]
    fn test_out_of_range_minutes_are_clamped() {
        let settings = Settings {
            user_id: None,
            theme_mode: ThemeMode::Light,
            auto_logoff_enabled: true,
            auto_logoff_time: 40_000,
        };
        assert_eq!(settings.timeout_policy().timeout_ms, 120 * 60_000);

        let settings = Settings { auto_logoff_time: 0, ..settings };
        assert_eq!(settings.timeout_policy().timeout_ms, 60_000);
    }

    #[test]
    fn test_settings_patch_omits_absent_fields() {
        let patch = SettingsPatch {
            auto_logoff_time: Some(15),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "auto_logoff_time": 15 }));
    }

    #[test]
    fn test_task_status_wire_values() {
        let task: Task = serde_json::from_value(json!({
            "task_id": 1,
            "title": "Write docs",
            "description": "README",
            "status": "in progress",
            "sprint_id": null,
            "assigned_to": 4,
            "project_id": 2,
            "label_names": ["docs"]
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("done"), Some(TaskStatus::Done));
        assert_eq!(TaskStatus::parse("blocked"), None);
    }

    #[test]
    fn test_sprint_dates_are_optional() {
        let sprint: Sprint = serde_json::from_value(json!({
            "sprint_id": 9,
            "name": "Sprint 1",
            "start_date": "2024-05-01",
            "end_date": null,
            "project_id": 2
        }))
        .unwrap();
        assert_eq!(sprint.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(sprint.end_date, None);
    }

    #[test]
    fn test_unknown_sex_reads_as_other() {
        let user: User = serde_json::from_value(json!({
            "username": "ana",
            "email": "ana@example.com",
            "company": "ACME",
            "phone": "123",
            "sex": "unspecified"
        }))
        .unwrap();
        assert_eq!(user.sex, Sex::Other);
    }
}
