//! Board Helpers
//!
//! Pure helpers behind the task board and countdown display.

use std::collections::HashMap;

use crate::models::{Task, TaskStatus};

/// Split tasks into board columns, keeping server order within a column
pub fn group_by_status(tasks: &[Task]) -> HashMap<TaskStatus, Vec<Task>> {
    let mut columns: HashMap<TaskStatus, Vec<Task>> =
        TaskStatus::ALL.into_iter().map(|status| (status, Vec::new())).collect();
    for task in tasks {
        columns.entry(task.status).or_default().push(task.clone());
    }
    columns
}

/// `m:ss`, minutes unpadded
pub fn format_countdown(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Parse an optional id from a `<select>` value; empty means none
pub fn parse_optional_id(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(task_id: u32, status: TaskStatus) -> Task {
        Task {
            task_id,
            title: format!("Task {}", task_id),
            description: String::new(),
            status,
            sprint_id: None,
            assigned_to: None,
            project_id: 1,
            label_names: Vec::new(),
        }
    }

    #[test]
    fn test_group_by_status() {
        let tasks = vec![
            task(1, TaskStatus::Done),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::Done),
        ];
        let columns = group_by_status(&tasks);

        assert_eq!(columns.len(), 3);
        let done: Vec<u32> = columns[&TaskStatus::Done].iter().map(|t| t.task_id).collect();
        assert_eq!(done, vec![1, 3]);
        assert_eq!(columns[&TaskStatus::Todo].len(), 1);
        assert!(columns[&TaskStatus::InProgress].is_empty());
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(60), "1:00");
        assert_eq!(format_countdown(605), "10:05");
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(""), None);
        assert_eq!(parse_optional_id("12"), Some(12));
        assert_eq!(parse_optional_id("abc"), None);
    }
}
