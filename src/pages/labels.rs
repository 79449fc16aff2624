//! Labels Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, CreateLabelArgs};
use crate::models::Label;
use crate::services::use_dialog;

#[component]
pub fn LabelsPage(project_id: u32) -> impl IntoView {
    let api = use_api();
    let dialog = use_dialog();
    let labels = RwSignal::new(Vec::<Label>::new());
    let new_name = RwSignal::new(String::new());

    let load_api = api.clone();
    spawn_local(async move {
        match load_api.list_labels(project_id).await {
            Ok(loaded) => labels.set(loaded),
            Err(err) => log::error!("[LABEL] failed to load labels: {}", err),
        }
    });

    let add_api = api.clone();
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let api = add_api.clone();
        spawn_local(async move {
            let args = CreateLabelArgs { name: &name, project_id };
            match api.create_label(&args).await {
                Ok(created) => {
                    labels.update(|list| {
                        list.push(Label {
                            label_id: created.label_id,
                            name,
                            project_id: Some(project_id),
                        })
                    });
                    new_name.set(String::new());
                }
                Err(err) => dialog.info(err.user_message("Failed to add label")),
            }
        });
    };

    let delete = move |label_id: u32| {
        let api = api.clone();
        dialog.confirm("Are you sure you want to delete this label?", move || {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_label(label_id).await {
                    Ok(()) => labels.update(|list| list.retain(|l| l.label_id != label_id)),
                    Err(err) => dialog.info(err.user_message("Failed to delete label")),
                }
            });
        });
    };

    view! {
        <section class="labels-page">
            <h2>"Labels"</h2>
            <form class="inline-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Label Name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Add Label"</button>
            </form>
            <ul class="label-list">
                <For
                    each=move || labels.get()
                    key=|label| label.label_id
                    children=move |label| {
                        let label_id = label.label_id;
                        let delete = delete.clone();
                        view! {
                            <li class="label-row">
                                <span class="label-chip">{label.name}</span>
                                <button class="icon-btn" title="Delete" on:click=move |_| delete(label_id)>"×"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
