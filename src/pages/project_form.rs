//! Project Form Page
//!
//! Create a project, or edit one the user owns: details, members, deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, AddMemberArgs, ProjectArgs};
use crate::context::{use_app_context, Page};
use crate::models::Member;
use crate::services::use_dialog;
use crate::store::{store_remove_project, store_update_project, use_app_store};

#[component]
pub fn ProjectFormPage(#[prop(optional)] project_id: Option<u32>) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let store = use_app_store();
    let dialog = use_dialog();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let members = RwSignal::new(Vec::<Member>::new());
    let new_member_email = RwSignal::new(String::new());

    if let Some(project_id) = project_id {
        let api = api.clone();
        spawn_local(async move {
            match api.get_project(project_id).await {
                Ok(project) if project.is_owner => {
                    name.set(project.name);
                    description.set(project.description);
                }
                Ok(_) => {
                    dialog.info("You are not authorized to edit this project");
                    ctx.go(Page::Projects);
                    return;
                }
                Err(err) => {
                    dialog.info(err.user_message("Failed to load project"));
                    return;
                }
            }
            match api.list_members(project_id).await {
                Ok(loaded) => members.set(loaded),
                Err(err) => log::error!("[PROJECT] failed to load members: {}", err),
            }
        });
    }

    let save_api = api.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = save_api.clone();
        spawn_local(async move {
            let (name_value, description_value) = (name.get_untracked(), description.get_untracked());
            let args = ProjectArgs {
                name: name_value.trim(),
                description: description_value.trim(),
            };
            match project_id {
                None => match api.create_project(&args).await {
                    Ok(()) => {
                        dialog.info("Project added successfully");
                        name.set(String::new());
                        description.set(String::new());
                        ctx.reload();
                    }
                    Err(err) => dialog.info(err.user_message("Failed to add project")),
                },
                Some(project_id) => match api.update_project(project_id, &args).await {
                    Ok(()) => {
                        dialog.info("Project updated successfully");
                        store_update_project(&store, project_id, args.name, args.description);
                    }
                    Err(err) => dialog.info(err.user_message("Failed to update project")),
                },
            }
        });
    };

    let member_api = api.clone();
    let on_add_member = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(project_id) = project_id else { return };
        let email = new_member_email.get_untracked().trim().to_string();
        if email.is_empty() {
            return;
        }
        let api = member_api.clone();
        spawn_local(async move {
            let args = AddMemberArgs { email: &email, project_id };
            match api.add_member(&args).await {
                Ok(added) => {
                    members.update(|list| list.push(Member { user_id: added.user_id, email }));
                    new_member_email.set(String::new());
                    dialog.info("User added to project successfully");
                }
                Err(err) => dialog.info(err.user_message("Failed to add user to project")),
            }
        });
    };

    let remove_api = api.clone();
    let remove_member = move |user_id: u32| {
        let Some(project_id) = project_id else { return };
        let api = remove_api.clone();
        spawn_local(async move {
            match api.remove_member(project_id, user_id).await {
                Ok(()) => {
                    members.update(|list| list.retain(|m| m.user_id != user_id));
                    dialog.info("User removed from project successfully");
                }
                Err(err) => dialog.info(err.user_message("Failed to remove user from project")),
            }
        });
    };

    let delete_api = api.clone();
    let on_delete = move |_: web_sys::MouseEvent| {
        let Some(project_id) = project_id else { return };
        let api = delete_api.clone();
        dialog.confirm("Are you sure you want to delete this project?", move || {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_project(project_id).await {
                    Ok(()) => {
                        store_remove_project(&store, project_id);
                        dialog.info("Project deleted successfully");
                        ctx.go(Page::Projects);
                    }
                    Err(err) => dialog.info(err.user_message("Failed to delete project")),
                }
            });
        });
    };

    let editing = project_id.is_some();

    view! {
        <section class="project-form-page">
            <h2>{if editing { "Edit Project" } else { "Add Project" }}</h2>
            <form class="stacked-form" on:submit=on_save>
                <label>
                    "Project Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Project Description"
                    <textarea
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="primary-btn">
                    {if editing { "Save" } else { "Add Project" }}
                </button>
            </form>

            <Show when=move || editing>
                <h3>"Members"</h3>
                <form class="inline-form" on:submit=on_add_member.clone()>
                    <input
                        type="email"
                        placeholder="User Email"
                        prop:value=move || new_member_email.get()
                        on:input=move |ev| new_member_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn">"Add User"</button>
                </form>
                <ul class="member-list">
                    <For
                        each=move || members.get()
                        key=|member| member.user_id
                        children={
                            let remove_member = remove_member.clone();
                            move |member| {
                                let user_id = member.user_id;
                                let remove_member = remove_member.clone();
                                view! {
                                    <li class="member-row">
                                        <span>{member.email}</span>
                                        <button class="icon-btn" title="Remove" on:click=move |_| remove_member(user_id)>
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
                <button class="danger-btn" on:click=on_delete.clone()>"Delete Project"</button>
            </Show>
        </section>
    }
}
