//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Project;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Projects the current user belongs to, shared by the sidebar and the projects page
    pub projects: Vec<Project>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_projects(store: &AppStore, projects: Vec<Project>) {
    *store.projects().write() = projects;
}

/// Update a project in the store by ID
pub fn store_update_project(store: &AppStore, project_id: u32, name: &str, description: &str) {
    if let Some(project) = store
        .projects()
        .write()
        .iter_mut()
        .find(|project| project.project_id == project_id)
    {
        project.name = name.to_string();
        project.description = description.to_string();
    }
}

/// Remove a project from the store by ID
pub fn store_remove_project(store: &AppStore, project_id: u32) {
    store.projects().write().retain(|project| project.project_id != project_id);
}
