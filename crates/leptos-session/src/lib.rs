//! Leptos Session Utilities
//!
//! Session plumbing for Leptos CSR apps talking to a cookie-session backend:
//! - `idle`: inactivity-logout state machine (pure, no browser APIs)
//! - `timer`: reactive handle driving the machine with browser timers
//! - `activity`: window listeners that count as user activity
//! - `pipeline`: start/settled/forbidden hooks around every request
//! - `loading`: in-flight counter behind a loading indicator

pub mod activity;
pub mod idle;
pub mod loading;
pub mod pipeline;
pub mod timer;

pub use activity::{ActivityListeners, ACTIVITY_EVENTS};
pub use idle::{IdleMachine, IdleState, TimeoutPolicy, TimerCommand, MAX_DELAY_MS, MS_PER_MINUTE, MS_PER_SECOND};
pub use loading::LoadingCounter;
pub use pipeline::{HttpFailure, Pipeline, RequestHooks, SettleGuard, FORBIDDEN};
pub use timer::IdleTimer;
