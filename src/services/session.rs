//! Session State
//!
//! Global loading counter and the forbidden flag, fed by the request
//! pipeline hooks.

use leptos::prelude::*;
use leptos_session::{LoadingCounter, RequestHooks};

#[derive(Clone, Copy)]
pub struct SessionState {
    loading: RwSignal<LoadingCounter>,
    /// Set on any 403; never cleared
    forbidden: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(LoadingCounter::default()),
            forbidden: RwSignal::new(false),
        }
    }

    /// Whether any request is in flight (tracked)
    pub fn is_loading(&self) -> bool {
        self.loading.with(LoadingCounter::is_loading)
    }

    pub fn in_flight(&self) -> u32 {
        self.loading.with_untracked(LoadingCounter::in_flight)
    }

    /// Whether the backend ever refused access (tracked)
    pub fn is_forbidden(&self) -> bool {
        self.forbidden.get()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHooks for SessionState {
    fn on_request_start(&self) {
        self.loading.update(LoadingCounter::start);
    }

    fn on_request_settled(&self) {
        self.loading.update(LoadingCounter::settle);
    }

    fn on_forbidden(&self) {
        if !self.forbidden.get_untracked() {
            log::warn!("[SESSION] access forbidden, showing unauthorized screen");
            self.forbidden.set(true);
        }
    }
}

pub fn use_session() -> SessionState {
    expect_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use leptos_session::{HttpFailure, Pipeline};

    #[derive(Debug)]
    struct Status(u16);

    impl HttpFailure for Status {
        fn http_status(&self) -> Option<u16> {
            Some(self.0)
        }
    }

    #[test]
    fn test_forbidden_flag_is_sticky() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionState::new();
            let pipeline = Pipeline::new().with_hooks(session);

            let denied: Result<(), Status> = block_on(pipeline.run(async { Err(Status(403)) }));
            assert!(denied.is_err());
            assert!(session.forbidden.get_untracked());

            let ok: Result<u32, Status> = block_on(pipeline.run(async { Ok(7) }));
            assert_eq!(ok.unwrap(), 7);
            assert!(session.forbidden.get_untracked());
            assert_eq!(session.in_flight(), 0);
        });
    }

    #[test]
    fn test_other_failures_do_not_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionState::new();
            let pipeline = Pipeline::new().with_hooks(session);

            for status in [400, 401, 404, 500] {
                let result: Result<(), Status> = block_on(pipeline.run(async move { Err(Status(status)) }));
                assert!(result.is_err());
            }
            assert!(!session.forbidden.get_untracked());
            assert_eq!(session.in_flight(), 0);
        });
    }
}
