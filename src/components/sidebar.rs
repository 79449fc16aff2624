//! Dashboard Sidebar Component
//!
//! Navigation drawer with an expandable per-project menu.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (list_open, set_list_open) = signal(false);
    let (open_projects, set_open_projects) = signal(HashSet::<u32>::new());

    let toggle_project = move |project_id: u32| {
        set_open_projects.update(|open| {
            if !open.remove(&project_id) {
                open.insert(project_id);
            }
        });
    };

    view! {
        <nav class="sidebar">
            <ul class="nav-list">
                <li class="nav-item" on:click=move |_| ctx.go(Page::Projects)>"Projects"</li>
                <li
                    class="nav-item"
                    on:click=move |_| {
                        ctx.reload();
                        set_list_open.update(|open| *open = !*open);
                    }
                >
                    "Manage Projects"
                    <span class="expand-icon">{move || if list_open.get() { "▴" } else { "▾" }}</span>
                </li>
                <Show when=move || list_open.get()>
                    <ul class="nav-sublist">
                        <For
                            each=move || store.projects().get()
                            key=|project| project.project_id
                            children=move |project| {
                                let id = project.project_id;
                                let is_open = move || open_projects.get().contains(&id);
                                view! {
                                    <li class="nav-item project-entry" on:click=move |_| toggle_project(id)>
                                        {project.name.clone()}
                                        <span class="expand-icon">{move || if is_open() { "▴" } else { "▾" }}</span>
                                    </li>
                                    <Show when=is_open>
                                        <ul class="nav-sublist">
                                            <li class="nav-item" on:click=move |_| ctx.go(Page::AddTask(id))>"Add Task"</li>
                                            <li class="nav-item" on:click=move |_| ctx.go(Page::ProjectTasks(id))>"Tasks"</li>
                                            <li class="nav-item" on:click=move |_| ctx.go(Page::Labels(id))>"Labels"</li>
                                            <li class="nav-item" on:click=move |_| ctx.go(Page::Sprints(id))>"Sprints"</li>
                                        </ul>
                                    </Show>
                                }
                            }
                        />
                    </ul>
                </Show>
            </ul>
            <ul class="nav-list nav-bottom">
                <li class="nav-item" on:click=move |_| ctx.go(Page::Profile)>"Profile"</li>
                <li class="nav-item" on:click=move |_| ctx.go(Page::Settings)>"Settings"</li>
                <li class="nav-item" on:click=move |_| on_logout.run(())>"Logout"</li>
            </ul>
        </nav>
    }
}
