//! Register Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, RegisterArgs};
use crate::context::{use_app_context, Screen};
use crate::models::Sex;
use crate::services::use_dialog;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let dialog = use_dialog();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let sex = RwSignal::new(Sex::Other);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            let (username, email, password, company, phone) = (
                username.get_untracked(),
                email.get_untracked(),
                password.get_untracked(),
                company.get_untracked(),
                phone.get_untracked(),
            );
            let args = RegisterArgs {
                username: username.trim(),
                email: email.trim(),
                password: &password,
                company: company.trim(),
                phone: phone.trim(),
                sex: sex.get_untracked(),
            };
            match api.register(&args).await {
                Ok(()) => ctx.navigate(Screen::Login),
                Err(err) => dialog.info(err.user_message("An error occurred. Please try again.")),
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
            <form class="auth-form" on:submit=on_submit>
                {text_field("Username", "text", username)}
                {text_field("Email Address", "email", email)}
                {text_field("Password", "password", password)}
                {text_field("Company", "text", company)}
                {text_field("Phone", "tel", phone)}
                <label>
                    "Sex"
                    <select on:change=move |ev| sex.set(Sex::parse(&event_target_value(&ev)))>
                        {Sex::ALL
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.as_str() prop:selected=move || sex.get() == option>
                                    {option.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="primary-btn">"Register"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Screen::Login);
                }>"Sign in"</a>
            </p>
        </div>
    }
}
