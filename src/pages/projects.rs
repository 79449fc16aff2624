//! Projects Page
//!
//! Projects the user belongs to. Owners can edit, members can leave.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::{use_app_context, Page};
use crate::services::use_dialog;
use crate::store::{store_remove_project, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let store = use_app_store();
    let dialog = use_dialog();

    ctx.reload();

    let leave = move |project_id: u32| {
        let api = api.clone();
        dialog.confirm("Are you sure to delete this project membership?", move || {
            let api = api.clone();
            spawn_local(async move {
                match api.leave_project(project_id).await {
                    Ok(()) => store_remove_project(&store, project_id),
                    Err(err) => dialog.info(err.user_message("Failed to leave project")),
                }
            });
        });
    };

    view! {
        <section class="projects-page">
            <div class="page-header">
                <h2>"Projects"</h2>
                <button class="primary-btn" on:click=move |_| ctx.go(Page::AddProject)>"Add Project"</button>
            </div>
            <Show
                when=move || !store.projects().get().is_empty()
                fallback=|| view! { <p class="empty">"You are not part of any project yet."</p> }
            >
                {
                let leave = leave.clone();
                view! {
                <ul class="project-list">
                    <For
                        each=move || store.projects().get()
                        key=|project| (project.project_id, project.name.clone(), project.description.clone())
                        children=move |project| {
                            let id = project.project_id;
                            let leave = leave.clone();
                            view! {
                                <li class="project-row">
                                    <div class="project-info" on:click=move |_| ctx.go(Page::ProjectTasks(id))>
                                        <span class="project-name">{project.name.clone()}</span>
                                        <span class="project-description">{project.description.clone()}</span>
                                    </div>
                                    {if project.is_owner {
                                        view! {
                                            <button class="icon-btn" title="Edit" on:click=move |_| ctx.go(Page::EditProject(id))>
                                                "✎"
                                            </button>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <button class="icon-btn" title="Leave" on:click=move |_| leave(id)>
                                                "×"
                                            </button>
                                        }.into_any()
                                    }}
                                </li>
                            }
                        }
                    />
                </ul>
                }
                }
            </Show>
        </section>
    }
}
