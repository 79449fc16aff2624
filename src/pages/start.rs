//! Start Screen

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

#[component]
pub fn StartPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="start-page">
            <h1>"Taskboard"</h1>
            <p>"Plan projects, track tasks, run sprints."</p>
            <div class="start-actions">
                <button class="primary-btn" on:click=move |_| ctx.navigate(Screen::Login)>"Login"</button>
                <button class="secondary-btn" on:click=move |_| ctx.navigate(Screen::Register)>"Register"</button>
            </div>
        </div>
    }
}
