//! Countdown Component
//!
//! Time left before auto-logoff, shown in the dashboard header.

use leptos::prelude::*;

use crate::board::format_countdown;
use crate::services::use_idle_timer;

#[component]
pub fn Countdown() -> impl IntoView {
    let timer = use_idle_timer();

    view! {
        <span class="countdown" class:countdown-off=move || !timer.is_enabled()>
            <span class="countdown-icon">"⏱"</span>
            {move || format_countdown(timer.remaining_secs())}
        </span>
    }
}
