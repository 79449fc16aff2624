//! Profile Page
//!
//! Edit the current user's profile, change password, delete the account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ProfileUpdate};
use crate::context::{use_app_context, Screen};
use crate::models::{Sex, User};
use crate::services::use_dialog;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let dialog = use_dialog();
    let user = RwSignal::new(User::default());
    let new_password = RwSignal::new(String::new());

    let load_api = api.clone();
    spawn_local(async move {
        match load_api.current_user().await {
            Ok(loaded) => user.set(loaded),
            Err(err) => {
                log::error!("[PROFILE] failed to load user: {}", err);
                dialog.info("Failed to load user data.");
            }
        }
    });

    let save_api = api.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = save_api.clone();
        spawn_local(async move {
            let current = user.get_untracked();
            let password = new_password.get_untracked();
            let args = ProfileUpdate {
                username: current.username.trim(),
                company: current.company.trim(),
                phone: current.phone.trim(),
                sex: current.sex,
                new_password: Some(password.as_str()).filter(|p| !p.is_empty()),
            };
            match api.update_profile(&args).await {
                Ok(()) => {
                    new_password.set(String::new());
                    dialog.info("Profile updated successfully");
                }
                Err(err) => dialog.info(err.user_message("Failed to update profile!")),
            }
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let api = api.clone();
        dialog.confirm(
            "Are you sure you want to delete your account? This action cannot be undone.",
            move || {
                let api = api.clone();
                spawn_local(async move {
                    if let Err(err) = api.delete_account().await {
                        log::error!("[PROFILE] failed to delete account: {}", err);
                        dialog.info("Failed to delete account. Please try again.");
                        return;
                    }
                    if let Err(err) = api.logout().await {
                        log::warn!("[PROFILE] logout after account deletion failed: {}", err);
                    }
                    ctx.navigate(Screen::Start);
                });
            },
        );
    };

    let text_field = move |label: &'static str, read: fn(&User) -> &str, write: fn(&mut User, String)| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    prop:value=move || user.with(|u| read(u).to_string())
                    on:input=move |ev| user.update(|u| write(u, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <section class="profile-page">
            <h2>"Profile"</h2>
            <form class="stacked-form" on:submit=on_save>
                {text_field("Username", |u| u.username.as_str(), |u, v| u.username = v)}
                <label>
                    "Email Address"
                    <input type="email" readonly prop:value=move || user.with(|u| u.email.clone()) />
                </label>
                <label>
                    "New Password"
                    <input
                        type="password"
                        placeholder="Leave blank to keep the current password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                {text_field("Company", |u| u.company.as_str(), |u, v| u.company = v)}
                {text_field("Phone", |u| u.phone.as_str(), |u, v| u.phone = v)}
                <label>
                    "Sex"
                    <select on:change=move |ev| user.update(|u| u.sex = Sex::parse(&event_target_value(&ev)))>
                        {Sex::ALL
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.as_str() prop:selected=move || user.with(|u| u.sex == option)>
                                    {option.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="form-actions">
                    <button type="submit" class="primary-btn">"Save"</button>
                    <button type="button" class="danger-btn" on:click=on_delete>"Delete Account"</button>
                </div>
            </form>
        </section>
    }
}
