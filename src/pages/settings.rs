//! Settings Page
//!
//! Theme and auto-logoff preferences. Changes apply immediately and are
//! saved to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_session::MS_PER_MINUTE;

use crate::api::{use_api, ApiClient};
use crate::config::{MAX_IDLE_MINUTES, MIN_IDLE_MINUTES};
use crate::models::{SettingsPatch, ThemeMode};
use crate::services::{use_idle_timer, use_theme};

/// Clamp a slider value into the allowed auto-logoff range
pub fn clamp_minutes(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .map(|minutes| minutes.clamp(MIN_IDLE_MINUTES, MAX_IDLE_MINUTES))
}

/// Slider position for a timeout in milliseconds
pub fn minutes_from_ms(timeout_ms: u32) -> u32 {
    (timeout_ms / MS_PER_MINUTE).clamp(MIN_IDLE_MINUTES, MAX_IDLE_MINUTES)
}

fn save(api: &ApiClient, patch: SettingsPatch) {
    let api = api.clone();
    spawn_local(async move {
        if let Err(err) = api.update_settings(&patch).await {
            log::error!("[SETTINGS] failed to save {:?}: {}", patch, err);
        }
    });
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = use_api();
    let theme = use_theme();
    let timer = use_idle_timer();
    // The timer already holds the loaded policy; `/setting` refreshes it below
    let minutes = RwSignal::new(minutes_from_ms(timer.timeout_ms()));

    let load_api = api.clone();
    spawn_local(async move {
        match load_api.get_settings().await {
            Ok(settings) => {
                minutes.set(settings.auto_logoff_time.clamp(MIN_IDLE_MINUTES, MAX_IDLE_MINUTES));
                theme.apply(settings.theme_mode);
            }
            Err(err) => log::warn!("[SETTINGS] failed to load settings: {}", err),
        }
    });

    let theme_api = api.clone();
    let set_theme = move |mode: ThemeMode| theme.set_mode(&theme_api, mode);
    let set_light = set_theme.clone();

    let toggle_api = api.clone();
    let on_toggle = move |_: web_sys::Event| {
        timer.toggle();
        timer.reset_timer(Some(minutes.get_untracked() * MS_PER_MINUTE));
        save(
            &toggle_api,
            SettingsPatch {
                auto_logoff_enabled: Some(timer.is_enabled_untracked()),
                ..Default::default()
            },
        );
    };

    // Slider release commits the new time
    let on_commit = move |ev: web_sys::Event| {
        let Some(value) = clamp_minutes(&event_target_value(&ev)) else { return };
        minutes.set(value);
        timer.reset_timer(Some(value * MS_PER_MINUTE));
        save(
            &api,
            SettingsPatch {
                auto_logoff_time: Some(value),
                ..Default::default()
            },
        );
    };

    view! {
        <section class="settings-page">
            <h2>"Settings"</h2>
            <div class="setting-row theme-buttons">
                <button
                    class=move || if theme.is_dark() { "secondary-btn" } else { "primary-btn" }
                    on:click=move |_| set_light(ThemeMode::Light)
                >
                    "Light Mode"
                </button>
                <button
                    class=move || if theme.is_dark() { "primary-btn" } else { "secondary-btn" }
                    on:click=move |_| set_theme(ThemeMode::Dark)
                >
                    "Dark Mode"
                </button>
            </div>
            <div class="setting-row">
                <label class="switch">
                    <input type="checkbox" prop:checked=move || timer.is_enabled() on:change=on_toggle />
                    "Auto Logoff"
                </label>
            </div>
            <div class="setting-row slider-row">
                <label for="auto-logoff-minutes">"Auto Logoff Time (minutes)"</label>
                <input
                    id="auto-logoff-minutes"
                    type="range"
                    step="1"
                    min=MIN_IDLE_MINUTES.to_string()
                    max=MAX_IDLE_MINUTES.to_string()
                    prop:value=move || minutes.get().to_string()
                    on:input=move |ev| {
                        if let Some(value) = clamp_minutes(&event_target_value(&ev)) {
                            minutes.set(value);
                        }
                    }
                    on:change=on_commit
                />
                <span class="slider-value">{move || minutes.get()}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_minutes() {
        assert_eq!(clamp_minutes("15"), Some(15));
        assert_eq!(clamp_minutes("0"), Some(MIN_IDLE_MINUTES));
        assert_eq!(clamp_minutes("500"), Some(MAX_IDLE_MINUTES));
        assert_eq!(clamp_minutes(""), None);
    }

    #[test]
    fn test_slider_starts_from_timer_timeout() {
        assert_eq!(minutes_from_ms(25 * MS_PER_MINUTE), 25);
        assert_eq!(minutes_from_ms(30_000), MIN_IDLE_MINUTES);
        assert_eq!(minutes_from_ms(leptos_session::MAX_DELAY_MS), MAX_IDLE_MINUTES);
    }
}
