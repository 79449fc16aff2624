//! Unauthorized Screen

use leptos::prelude::*;

#[component]
pub fn Unauthorized() -> impl IntoView {
    view! {
        <div class="unauthorized">
            <h1>"Unauthorized Access"</h1>
            <p>"You do not have permission to view this content."</p>
        </div>
    }
}
