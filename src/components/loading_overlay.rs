//! Loading Overlay Component

use leptos::prelude::*;

use crate::services::use_session;

/// Full-screen spinner while any request is in flight
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.is_loading()>
            <div class="loading-overlay">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
