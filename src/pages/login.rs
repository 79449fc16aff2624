//! Login Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, LoginArgs};
use crate::context::{use_app_context, Screen};
use crate::services::use_dialog;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let dialog = use_dialog();
    let (log_data, set_log_data) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            let log_data = log_data.get_untracked();
            let password = password.get_untracked();
            let args = LoginArgs {
                log_data: log_data.trim(),
                password: &password,
            };
            match api.login(&args).await {
                Ok(()) => {
                    log::info!("[AUTH] signed in");
                    ctx.navigate(Screen::home());
                }
                Err(err) => dialog.info(err.user_message("Invalid login credentials")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email or Login"
                    <input
                        type="text"
                        required
                        autofocus
                        prop:value=move || log_data.get()
                        on:input=move |ev| set_log_data.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="primary-btn">"Sign In"</button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Screen::Register);
                }>"Register"</a>
            </p>
        </div>
    }
}
