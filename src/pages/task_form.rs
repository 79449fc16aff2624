//! Task Form Page
//!
//! Create a task in a project, or edit one including its labels.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, LabelRef, TaskArgs};
use crate::board::parse_optional_id;
use crate::context::{use_app_context, Page};
use crate::models::{Label, Member, Sprint, TaskStatus};
use crate::services::use_dialog;

#[component]
pub fn TaskFormPage(project_id: u32, #[prop(optional)] task_id: Option<u32>) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let dialog = use_dialog();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(TaskStatus::Todo);
    let sprint_id = RwSignal::new(None::<u32>);
    let assigned_to = RwSignal::new(None::<u32>);
    let selected_labels = RwSignal::new(BTreeSet::<u32>::new());

    let users = RwSignal::new(Vec::<Member>::new());
    let sprints = RwSignal::new(Vec::<Sprint>::new());
    let project_labels = RwSignal::new(Vec::<Label>::new());

    let load_api = api.clone();
    spawn_local(async move {
        let api = load_api;
        match task_id {
            Some(task_id) => match api.task_details(task_id).await {
                Ok(details) => {
                    let task = details.task;
                    title.set(task.title);
                    description.set(task.description);
                    status.set(task.status);
                    sprint_id.set(task.sprint_id);
                    assigned_to.set(task.assigned_to);
                    selected_labels.set(task.labels.iter().map(|l| l.label_id).collect());
                    users.set(details.users);
                    sprints.set(details.sprints);
                    project_labels.set(details.project_labels);
                }
                Err(err) => log::error!("[TASK] failed to load task {}: {}", task_id, err),
            },
            None => {
                match api.list_members(project_id).await {
                    Ok(loaded) => users.set(loaded),
                    Err(err) => log::error!("[TASK] failed to load members: {}", err),
                }
                match api.list_sprints(project_id).await {
                    Ok(loaded) => sprints.set(loaded),
                    Err(err) => log::error!("[TASK] failed to load sprints: {}", err),
                }
            }
        }
    });

    let save_api = api.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = save_api.clone();
        spawn_local(async move {
            let (title_value, description_value) = (title.get_untracked(), description.get_untracked());
            let mut args = TaskArgs {
                title: title_value.trim(),
                description: description_value.trim(),
                status: status.get_untracked(),
                sprint_id: sprint_id.get_untracked(),
                assigned_to: assigned_to.get_untracked(),
                project_id,
                labels: None,
            };
            let result = match task_id {
                Some(task_id) => {
                    args.labels = Some(
                        selected_labels
                            .get_untracked()
                            .into_iter()
                            .map(|label_id| LabelRef { label_id })
                            .collect(),
                    );
                    api.update_task(task_id, &args).await
                }
                None => api.create_task(&args).await,
            };
            match result {
                Ok(()) => ctx.go(Page::ProjectTasks(project_id)),
                Err(err) => dialog.info(err.user_message("Failed to save task")),
            }
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let Some(task_id) = task_id else { return };
        let api = api.clone();
        dialog.confirm("Are you sure you want to delete this task?", move || {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_task(task_id).await {
                    Ok(()) => ctx.go(Page::ProjectTasks(project_id)),
                    Err(err) => dialog.info(err.user_message("Failed to delete task")),
                }
            });
        });
    };

    let toggle_label = move |label_id: u32| {
        selected_labels.update(|selected| {
            if !selected.remove(&label_id) {
                selected.insert(label_id);
            }
        });
    };

    let editing = task_id.is_some();

    view! {
        <section class="task-form-page">
            <h2>{if editing { "Edit Task" } else { "Add Task" }}</h2>
            <form class="stacked-form" on:submit=on_save>
                <label>
                    "Title"
                    <input
                        type="text"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Status"
                    <select on:change=move |ev| {
                            if let Some(parsed) = TaskStatus::parse(&event_target_value(&ev)) {
                                status.set(parsed);
                            }
                        }
                    >
                        {TaskStatus::ALL
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.as_str() prop:selected=move || status.get() == option>
                                    {option.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Assignee"
                    <select on:change=move |ev| assigned_to.set(parse_optional_id(&event_target_value(&ev)))>
                        <option value="">"None"</option>
                        <For
                            each=move || users.get()
                            key=|user| user.user_id
                            children=move |user| {
                                let user_id = user.user_id;
                                view! {
                                    <option value=user_id.to_string() prop:selected=move || assigned_to.get() == Some(user_id)>
                                        {user.email}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
                <label>
                    "Sprint"
                    <select on:change=move |ev| sprint_id.set(parse_optional_id(&event_target_value(&ev)))>
                        <option value="">"None"</option>
                        <For
                            each=move || sprints.get()
                            key=|sprint| sprint.sprint_id
                            children=move |sprint| {
                                let id = sprint.sprint_id;
                                view! {
                                    <option value=id.to_string() prop:selected=move || sprint_id.get() == Some(id)>
                                        {sprint.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>

                <Show when=move || editing>
                    <fieldset class="label-picker">
                        <legend>"Labels"</legend>
                        <For
                            each=move || project_labels.get()
                            key=|label| label.label_id
                            children=move |label| {
                                let label_id = label.label_id;
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected_labels.with(|s| s.contains(&label_id))
                                            on:change=move |_| toggle_label(label_id)
                                        />
                                        {label.name}
                                    </label>
                                }
                            }
                        />
                    </fieldset>
                </Show>

                <div class="form-actions">
                    <button type="submit" class="primary-btn">"Save"</button>
                    <button type="button" class="secondary-btn" on:click=move |_| ctx.go(Page::ProjectTasks(project_id))>
                        "Cancel"
                    </button>
                    <Show when=move || editing>
                        <button type="button" class="danger-btn" on:click=on_delete.clone()>"Delete"</button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
