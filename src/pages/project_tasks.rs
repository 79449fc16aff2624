//! Project Tasks Board
//!
//! Three status columns, filtered server-side by label and sprint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, TaskFilter};
use crate::board::{group_by_status, parse_optional_id};
use crate::context::{use_app_context, Page};
use crate::models::{Label, Sprint, Task, TaskStatus};

#[component]
pub fn ProjectTasksPage(project_id: u32) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let tasks = RwSignal::new(Vec::<Task>::new());
    let labels = RwSignal::new(Vec::<Label>::new());
    let sprints = RwSignal::new(Vec::<Sprint>::new());
    let filter = RwSignal::new(TaskFilter::default());

    let options_api = api.clone();
    spawn_local(async move {
        match options_api.list_labels(project_id).await {
            Ok(loaded) => labels.set(loaded),
            Err(err) => log::error!("[BOARD] failed to load labels: {}", err),
        }
        match options_api.list_sprints(project_id).await {
            Ok(loaded) => sprints.set(loaded),
            Err(err) => log::error!("[BOARD] failed to load sprints: {}", err),
        }
    });

    // Reload tasks whenever the filter changes
    Effect::new(move |_| {
        let filter = filter.get();
        let api = api.clone();
        spawn_local(async move {
            match api.list_tasks(project_id, filter).await {
                Ok(loaded) => tasks.set(loaded),
                Err(err) => log::error!("[BOARD] failed to load tasks: {}", err),
            }
        });
    });

    let columns = Memo::new(move |_| tasks.with(|tasks| group_by_status(tasks)));

    view! {
        <section class="board-page">
            <div class="page-header">
                <h2>"Tasks"</h2>
                <button class="primary-btn" on:click=move |_| ctx.go(Page::AddTask(project_id))>"Add Task"</button>
            </div>
            <div class="board-filters">
                <label>
                    "Label"
                    <select on:change=move |ev| {
                        let label_id = parse_optional_id(&event_target_value(&ev));
                        filter.update(|f| f.label_id = label_id);
                    }>
                        <option value="">"All"</option>
                        <For
                            each=move || labels.get()
                            key=|label| label.label_id
                            children=|label| view! { <option value=label.label_id.to_string()>{label.name}</option> }
                        />
                    </select>
                </label>
                <label>
                    "Sprint"
                    <select on:change=move |ev| {
                        let sprint_id = parse_optional_id(&event_target_value(&ev));
                        filter.update(|f| f.sprint_id = sprint_id);
                    }>
                        <option value="">"All"</option>
                        <For
                            each=move || sprints.get()
                            key=|sprint| sprint.sprint_id
                            children=|sprint| view! { <option value=sprint.sprint_id.to_string()>{sprint.name}</option> }
                        />
                    </select>
                </label>
            </div>
            <div class="board-columns">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let column = move || {
                            columns.with(|columns| columns.get(&status).cloned().unwrap_or_default())
                        };
                        view! {
                            <div class="board-column">
                                <h3 class="column-title">{status.column_title()}</h3>
                                <For
                                    each=column
                                    key=|task| (task.task_id, task.title.clone(), task.status, task.label_names.clone())
                                    children=move |task| {
                                        let task_id = task.task_id;
                                        view! {
                                            <div
                                                class="task-card"
                                                on:click=move |_| ctx.go(Page::EditTask { project_id, task_id })
                                            >
                                                <div class="task-title">{task.title}</div>
                                                <div class="task-description">{task.description}</div>
                                                <div class="task-labels">
                                                    {task
                                                        .label_names
                                                        .into_iter()
                                                        .map(|name| view! { <span class="label-chip">{name}</span> })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
