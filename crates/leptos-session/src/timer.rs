//! Reactive Idle Timer
//!
//! Binds [`IdleMachine`] to real browser timers. The machine decides, this
//! handle applies its commands to a `gloo_timers` timeout and mirrors the
//! display state into signals.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

use crate::activity::ActivityListeners;
use crate::idle::{IdleMachine, TimeoutPolicy, TimerCommand, MS_PER_SECOND};

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Idle timer handle, cheap to copy and safe to put in context
#[derive(Clone, Copy)]
pub struct IdleTimer {
    machine: StoredValue<IdleMachine>,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    remaining: RwSignal<u32>,
    enabled: RwSignal<bool>,
    on_expire: Callback<()>,
}

impl IdleTimer {
    /// Create a dormant timer. `on_expire` runs once per armed expiration.
    pub fn new(on_expire: impl Fn() + Send + Sync + 'static) -> Self {
        let machine = IdleMachine::default();
        Self {
            remaining: RwSignal::new(machine.remaining_secs()),
            enabled: RwSignal::new(machine.is_enabled()),
            machine: StoredValue::new(machine),
            pending: StoredValue::new_local(None),
            on_expire: Callback::new(move |()| on_expire()),
        }
    }

    /// Seconds left on the countdown display (tracked)
    pub fn remaining_secs(&self) -> u32 {
        self.remaining.get()
    }

    /// Whether auto-logoff is on (tracked)
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn is_enabled_untracked(&self) -> bool {
        self.enabled.get_untracked()
    }

    pub fn timeout_ms(&self) -> u32 {
        self.machine
            .try_with_value(IdleMachine::timeout_ms)
            .unwrap_or_default()
    }

    /// Apply a freshly loaded policy and start counting if enabled
    pub fn configure(&self, policy: TimeoutPolicy) {
        log::info!(
            "[IDLE] policy loaded: enabled={}, timeout={}s",
            policy.enabled,
            policy.timeout_ms / MS_PER_SECOND
        );
        self.transition(|m| m.configure(policy, now_ms()));
    }

    /// Cancel the pending expiration and re-arm when enabled
    pub fn reset_timer(&self, new_timeout_ms: Option<u32>) {
        self.transition(|m| m.reset(now_ms(), new_timeout_ms));
    }

    /// Flip auto-logoff. Switching on does not arm until the next reset.
    pub fn toggle(&self) {
        self.transition(IdleMachine::toggle);
    }

    fn on_activity(&self) {
        let current = self.timeout_ms();
        self.reset_timer(Some(current));
    }

    fn tick(&self) {
        if let Some(remaining) = self.machine.try_update_value(|m| m.tick()) {
            if self.remaining.get_untracked() != remaining {
                self.remaining.set(remaining);
            }
        }
    }

    fn fire(&self, generation: u64) {
        let fired = self
            .machine
            .try_update_value(|m| m.fire(generation))
            .unwrap_or(false);
        if fired {
            log::info!("[IDLE] inactivity timeout reached");
            // We are inside this timeout's own callback: release it without dropping
            if let Some(Some(spent)) = self.pending.try_update_value(Option::take) {
                let _ = spent.forget();
            }
            self.on_expire.run(());
        }
    }

    fn transition(&self, f: impl FnOnce(&mut IdleMachine) -> TimerCommand) {
        let Some(command) = self.machine.try_update_value(f) else {
            return;
        };
        self.apply(command);
        self.sync();
    }

    fn apply(&self, command: TimerCommand) {
        match command {
            TimerCommand::Schedule { delay_ms, generation } => {
                let timer = *self;
                // Replacing the old handle drops it, which clears the browser timeout
                self.pending
                    .set_value(Some(Timeout::new(delay_ms, move || timer.fire(generation))));
            }
            TimerCommand::Cancel => self.pending.set_value(None),
            TimerCommand::Keep => {}
        }
    }

    fn sync(&self) {
        if let Some((enabled, remaining)) = self
            .machine
            .try_with_value(|m| (m.is_enabled(), m.remaining_secs()))
        {
            // Activity fires this on every mouse move; only notify on change
            if self.enabled.get_untracked() != enabled {
                self.enabled.set(enabled);
            }
            if self.remaining.get_untracked() != remaining {
                self.remaining.set(remaining);
            }
        }
    }

    /// Start the one-second display tick and listen for user activity.
    ///
    /// Call once from the component that owns the session; everything is torn
    /// down when that component's owner is cleaned up.
    pub fn mount(&self) {
        let timer = *self;
        let ticker = Interval::new(MS_PER_SECOND, move || timer.tick());
        let listeners = ActivityListeners::bind(move || timer.on_activity());
        let resources = StoredValue::new_local(Some((ticker, listeners)));

        on_cleanup(move || {
            resources.set_value(None);
            timer.pending.set_value(None);
            log::debug!("[IDLE] listeners removed");
        });
    }
}
