//! Idle Timer Wiring
//!
//! Creates the session's [`IdleTimer`], logs out on expiration and loads
//! the auto-logoff policy from settings.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_session::{IdleTimer, TimeoutPolicy};

use crate::api::{ApiClient, ApiResult};
use crate::config::AppConfig;
use crate::context::{AppContext, Screen};
use crate::models::Settings;

/// Policy from the settings response, or enabled with `fallback_minutes` when it failed
pub fn initial_policy(settings: ApiResult<Settings>, fallback_minutes: u32) -> TimeoutPolicy {
    match settings {
        Ok(settings) => settings.timeout_policy(),
        Err(err) => {
            log::warn!(
                "[IDLE] could not load settings ({}), falling back to {} minutes",
                err,
                fallback_minutes
            );
            TimeoutPolicy::from_minutes(true, fallback_minutes)
        }
    }
}

/// Create, mount and provide the idle timer for the current owner.
///
/// Must run once in the component that owns the authenticated session.
pub fn provide_idle_timer(api: ApiClient, config: &AppConfig) -> IdleTimer {
    let ctx = expect_context::<AppContext>();

    let logout_api = api.clone();
    let timer = IdleTimer::new(move || {
        let api = logout_api.clone();
        spawn_local(async move {
            if let Err(err) = api.logout().await {
                log::warn!("[IDLE] logout request failed: {}", err);
            }
            ctx.navigate(Screen::Start);
        });
    });
    timer.mount();
    provide_context(timer);

    let fallback_minutes = config.fallback_idle_minutes;
    spawn_local(async move {
        let policy = initial_policy(api.get_settings().await, fallback_minutes);
        timer.configure(policy);
    });

    timer
}

pub fn use_idle_timer() -> IdleTimer {
    expect_context::<IdleTimer>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::ThemeMode;
    use leptos_session::MS_PER_MINUTE;

    fn settings(enabled: bool, minutes: u32) -> Settings {
        Settings {
            user_id: Some(1),
            theme_mode: ThemeMode::Dark,
            auto_logoff_enabled: enabled,
            auto_logoff_time: minutes,
        }
    }

    #[test]
    fn test_loaded_settings_win() {
        let policy = initial_policy(Ok(settings(true, 5)), 10);
        assert_eq!(policy, TimeoutPolicy { enabled: true, timeout_ms: 5 * MS_PER_MINUTE });

        let policy = initial_policy(Ok(settings(false, 30)), 10);
        assert!(!policy.enabled);
        assert_eq!(policy.timeout_ms, 30 * MS_PER_MINUTE);
    }

    #[test]
    fn test_failed_fetch_falls_back_to_enabled() {
        let fallback = TimeoutPolicy { enabled: true, timeout_ms: 10 * MS_PER_MINUTE };

        let network = initial_policy(Err(ApiError::Network("connection refused".into())), 10);
        assert_eq!(network, fallback);

        let decode = initial_policy(Err(ApiError::Decode("missing field".into())), 10);
        assert_eq!(decode, fallback);
    }
}
