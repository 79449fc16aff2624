//! Sprints Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{parse_date, use_api, CreateSprintArgs};
use crate::models::Sprint;
use crate::services::use_dialog;

fn format_range(sprint: &Sprint) -> String {
    let format = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "…".to_string())
    };
    format!("{} → {}", format(sprint.start_date), format(sprint.end_date))
}

#[component]
pub fn SprintsPage(project_id: u32) -> impl IntoView {
    let api = use_api();
    let dialog = use_dialog();
    let sprints = RwSignal::new(Vec::<Sprint>::new());
    let name = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let load_api = api.clone();
    spawn_local(async move {
        match load_api.list_sprints(project_id).await {
            Ok(loaded) => sprints.set(loaded),
            Err(err) => log::error!("[SPRINT] failed to load sprints: {}", err),
        }
    });

    let add_api = api.clone();
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = add_api.clone();
        spawn_local(async move {
            let sprint_name = name.get_untracked().trim().to_string();
            let args = CreateSprintArgs {
                name: &sprint_name,
                start_date: parse_date(&start_date.get_untracked()),
                end_date: parse_date(&end_date.get_untracked()),
                project_id,
            };
            match api.create_sprint(&args).await {
                Ok(created) => {
                    let sprint = Sprint {
                        sprint_id: created.sprint_id,
                        name: sprint_name.clone(),
                        start_date: args.start_date,
                        end_date: args.end_date,
                        project_id: Some(project_id),
                    };
                    sprints.update(|list| list.push(sprint));
                    name.set(String::new());
                    start_date.set(String::new());
                    end_date.set(String::new());
                }
                Err(err) => dialog.info(err.user_message("Failed to add sprint")),
            }
        });
    };

    let delete = move |sprint_id: u32| {
        let api = api.clone();
        dialog.confirm("Are you sure you want to delete this sprint?", move || {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_sprint(sprint_id).await {
                    Ok(()) => sprints.update(|list| list.retain(|s| s.sprint_id != sprint_id)),
                    Err(err) => dialog.info(err.user_message("Failed to delete sprint")),
                }
            });
        });
    };

    let date_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type="date"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="sprints-page">
            <h2>"Sprints"</h2>
            <form class="inline-form" on:submit=on_add>
                <label>
                    "Sprint Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                {date_field("Start Date", start_date)}
                {date_field("End Date", end_date)}
                <button type="submit" class="primary-btn">"Add Sprint"</button>
            </form>
            <ul class="sprint-list">
                <For
                    each=move || sprints.get()
                    key=|sprint| sprint.sprint_id
                    children=move |sprint| {
                        let sprint_id = sprint.sprint_id;
                        let delete = delete.clone();
                        view! {
                            <li class="sprint-row">
                                <span class="sprint-name">{sprint.name.clone()}</span>
                                <span class="sprint-dates">{format_range(&sprint)}</span>
                                <button class="icon-btn" title="Delete" on:click=move |_| delete(sprint_id)>"×"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
