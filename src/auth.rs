//! Auth Gate
//!
//! Public screens are for signed-out users, protected ones for signed-in
//! users. The gate checks the session once on mount and redirects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::{use_app_context, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// Where to send a user who may not see a screen, if anywhere
pub fn redirect_for(access: Access, authenticated: bool) -> Option<Screen> {
    match (access, authenticated) {
        (Access::Public, true) => Some(Screen::home()),
        (Access::Protected, false) => Some(Screen::Login),
        _ => None,
    }
}

/// Render `children` only when `access` allows the current session
#[component]
pub fn AuthGate(access: Access, children: ChildrenFn) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let (authenticated, set_authenticated) = signal::<Option<bool>>(None);

    spawn_local(async move {
        let signed_in = match api.current_user().await {
            Ok(user) => !user.username.is_empty(),
            Err(err) => {
                if !err.is_unauthenticated() {
                    log::warn!("[AUTH] session check failed: {}", err);
                }
                false
            }
        };
        // The gate may be gone by now
        let _ = set_authenticated.try_set(Some(signed_in));
    });

    Effect::new(move |_| {
        if let Some(signed_in) = authenticated.get() {
            if let Some(target) = redirect_for(access, signed_in) {
                ctx.navigate(target);
            }
        }
    });

    let allowed = move || {
        authenticated
            .get()
            .is_some_and(|signed_in| redirect_for(access, signed_in).is_none())
    };

    view! {
        <Show
            when=allowed
            fallback=move || {
                authenticated
                    .get()
                    .is_none()
                    .then(|| view! { <div class="auth-pending"><div class="spinner"></div></div> })
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirects() {
        assert_eq!(redirect_for(Access::Public, false), None);
        assert_eq!(redirect_for(Access::Public, true), Some(Screen::home()));
        assert_eq!(redirect_for(Access::Protected, true), None);
        assert_eq!(redirect_for(Access::Protected, false), Some(Screen::Login));
    }
}
