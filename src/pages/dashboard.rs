//! Dashboard Shell
//!
//! Owns the authenticated session: mounts the idle timer, keeps the project
//! list fresh and switches between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{Countdown, Sidebar};
use crate::config::AppConfig;
use crate::context::{use_app_context, Page, Screen};
use crate::services::{provide_idle_timer, use_dialog, use_theme};
use crate::store::{store_set_projects, use_app_store};

use super::{
    LabelsPage, ProfilePage, ProjectFormPage, ProjectTasksPage, ProjectsPage, SettingsPage,
    SprintsPage, TaskFormPage,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let store = use_app_store();
    let dialog = use_dialog();
    let config = expect_context::<AppConfig>();

    provide_idle_timer(api.clone(), &config);
    use_theme().load(&api);

    // Load projects on mount and whenever a page asks for a reload
    let load_api = api.clone();
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let api = load_api.clone();
        spawn_local(async move {
            match api.list_projects().await {
                Ok(projects) => {
                    log::debug!("[DASH] loaded {} projects, trigger={}", projects.len(), trigger);
                    store_set_projects(&store, projects);
                }
                Err(err) => log::error!("[DASH] failed to load projects: {}", err),
            }
        });
    });

    let on_logout = Callback::new(move |()| {
        let api = api.clone();
        dialog.confirm("Are you sure you want to log out?", move || {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = api.logout().await {
                    log::warn!("[AUTH] logout request failed: {}", err);
                }
                ctx.navigate(Screen::Start);
            });
        });
    });

    let page = Memo::new(move |_| ctx.screen.get().page().unwrap_or_default());

    view! {
        <div class="dashboard">
            <header class="app-bar">
                <h1>"Dashboard"</h1>
                <Countdown />
            </header>
            <Sidebar on_logout=on_logout />
            <main class="dashboard-content">
                {move || match page.get() {
                    Page::Projects => view! { <ProjectsPage /> }.into_any(),
                    Page::AddProject => view! { <ProjectFormPage /> }.into_any(),
                    Page::EditProject(project_id) => {
                        view! { <ProjectFormPage project_id=project_id /> }.into_any()
                    }
                    Page::ProjectTasks(project_id) => {
                        view! { <ProjectTasksPage project_id=project_id /> }.into_any()
                    }
                    Page::AddTask(project_id) => {
                        view! { <TaskFormPage project_id=project_id /> }.into_any()
                    }
                    Page::EditTask { project_id, task_id } => {
                        view! { <TaskFormPage project_id=project_id task_id=task_id /> }.into_any()
                    }
                    Page::Labels(project_id) => view! { <LabelsPage project_id=project_id /> }.into_any(),
                    Page::Sprints(project_id) => view! { <SprintsPage project_id=project_id /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                    Page::Settings => view! { <SettingsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
