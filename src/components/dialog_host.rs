//! Dialog Host Component
//!
//! Renders the shared [`DialogContext`](crate::services::DialogContext).

use leptos::prelude::*;

use crate::services::{use_dialog, DialogKind};

#[component]
pub fn DialogHost() -> impl IntoView {
    let dialog = use_dialog();

    view! {
        <Show when=move || dialog.is_open()>
            <div class="dialog-backdrop" on:click=move |_| dialog.close()>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <p class="dialog-text">{move || dialog.text()}</p>
                    <div class="dialog-actions">
                        {move || match dialog.kind() {
                            DialogKind::Confirm => view! {
                                <button class="primary-btn" on:click=move |_| dialog.accept()>"Yes"</button>
                                <button class="secondary-btn" on:click=move |_| dialog.close()>"No"</button>
                            }.into_any(),
                            DialogKind::Info => view! {
                                <button class="primary-btn" on:click=move |_| dialog.close()>"Close"</button>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
