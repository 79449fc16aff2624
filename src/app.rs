//! Taskboard Frontend App
//!
//! Root component: builds the shared services and switches screens.

use leptos::prelude::*;
use leptos_session::Pipeline;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::auth::{Access, AuthGate};
use crate::components::{DialogHost, LoadingOverlay, Unauthorized};
use crate::config::AppConfig;
use crate::context::{AppContext, Screen, ScreenKind};
use crate::pages::{Dashboard, LoginPage, RegisterPage, StartPage};
use crate::services::{DialogContext, SessionState, ThemeContext};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // State
    let (screen, set_screen) = signal(Screen::Start);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let session = SessionState::new();
    let dialog = DialogContext::new();
    let theme = ThemeContext::new();

    // Session hooks are installed here and nowhere else
    let api = ApiClient::new(&config, Pipeline::new().with_hooks(session));
    log::info!("[APP] backend at {}", api.base_url());

    // Provide context to all children
    provide_context(AppContext::new((screen, set_screen), (reload_trigger, set_reload_trigger)));
    provide_context(session);
    provide_context(dialog);
    provide_context(theme);
    provide_context(Store::new(AppState::new()));
    provide_context(api.clone());
    provide_context(config);

    theme.load(&api);

    // Page changes inside the dashboard must not remount it (and its idle timer)
    let kind = Memo::new(move |_| ScreenKind::from(screen.get()));

    view! {
        <div class=move || format!("app-root {}", theme.mode().class())>
            <LoadingOverlay />
            <Show when=move || !session.is_forbidden() fallback=|| view! { <Unauthorized /> }>
                {move || match kind.get() {
                    ScreenKind::Start => view! {
                        <AuthGate access=Access::Public><StartPage /></AuthGate>
                    }.into_any(),
                    ScreenKind::Login => view! {
                        <AuthGate access=Access::Public><LoginPage /></AuthGate>
                    }.into_any(),
                    ScreenKind::Register => view! {
                        <AuthGate access=Access::Public><RegisterPage /></AuthGate>
                    }.into_any(),
                    ScreenKind::Dashboard => view! {
                        <AuthGate access=Access::Protected><Dashboard /></AuthGate>
                    }.into_any(),
                }}
            </Show>
            <DialogHost />
        </div>
    }
}
