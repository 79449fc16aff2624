//! Idle Timeout State Machine
//!
//! Pure bookkeeping for the inactivity logout. No browser timers live here:
//! every transition returns a [`TimerCommand`] telling the caller what to do
//! with its real timer handle.
//!
//! States:
//! - `Disabled`: nothing pending. Either the policy is off, or it was switched
//!   back on and waits for the next reset.
//! - `Armed`: one expiration is pending at `deadline_ms`.
//! - `Expired`: the pending expiration fired.

pub const MS_PER_SECOND: u32 = 1_000;
pub const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;

/// Longest delay `setTimeout` accepts; larger values wrap negative and fire at once
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Session timeout policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeoutPolicy {
    pub enabled: bool,
    pub timeout_ms: u32,
}

impl TimeoutPolicy {
    pub fn from_minutes(enabled: bool, minutes: u32) -> Self {
        Self {
            enabled,
            timeout_ms: minutes.max(1).saturating_mul(MS_PER_MINUTE).min(MAX_DELAY_MS),
        }
    }
}

impl Default for TimeoutPolicy {
    /// Off until the real policy is loaded
    fn default() -> Self {
        Self::from_minutes(false, 10)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdleState {
    Disabled,
    Armed { deadline_ms: f64, generation: u64 },
    Expired,
}

/// What the owner of the browser timer has to do after a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Drop any pending timeout and schedule a new one
    Schedule { delay_ms: u32, generation: u64 },
    /// Drop any pending timeout
    Cancel,
    /// Leave the pending timeout alone
    Keep,
}

#[derive(Clone, Debug)]
pub struct IdleMachine {
    policy: TimeoutPolicy,
    state: IdleState,
    remaining_secs: u32,
    generation: u64,
}

impl IdleMachine {
    pub fn new(policy: TimeoutPolicy) -> Self {
        Self {
            policy,
            state: IdleState::Disabled,
            remaining_secs: policy.timeout_ms / MS_PER_SECOND,
            generation: 0,
        }
    }

    pub fn policy(&self) -> TimeoutPolicy {
        self.policy
    }

    pub fn state(&self) -> IdleState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.policy.enabled
    }

    pub fn timeout_ms(&self) -> u32 {
        self.policy.timeout_ms
    }

    /// Seconds shown by the countdown display
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        match self.state {
            IdleState::Armed { deadline_ms, .. } => Some(deadline_ms),
            _ => None,
        }
    }

    /// Replace the whole policy (settings loaded) and start counting if enabled.
    pub fn configure(&mut self, policy: TimeoutPolicy, now_ms: f64) -> TimerCommand {
        self.policy.enabled = policy.enabled;
        self.reset(now_ms, Some(policy.timeout_ms))
    }

    /// Cancel the pending expiration and, when enabled, arm a new one.
    ///
    /// A non-zero `new_timeout_ms` also replaces the stored timeout and
    /// refills the countdown display.
    pub fn reset(&mut self, now_ms: f64, new_timeout_ms: Option<u32>) -> TimerCommand {
        if let Some(timeout_ms) = new_timeout_ms.filter(|ms| *ms > 0) {
            let timeout_ms = timeout_ms.min(MAX_DELAY_MS);
            self.policy.timeout_ms = timeout_ms;
            self.remaining_secs = timeout_ms / MS_PER_SECOND;
        }

        self.generation += 1;
        if !self.policy.enabled {
            self.state = IdleState::Disabled;
            return TimerCommand::Cancel;
        }

        let delay_ms = self.policy.timeout_ms;
        self.state = IdleState::Armed {
            deadline_ms: now_ms + f64::from(delay_ms),
            generation: self.generation,
        };
        TimerCommand::Schedule {
            delay_ms,
            generation: self.generation,
        }
    }

    pub fn disable(&mut self) -> TimerCommand {
        self.policy.enabled = false;
        self.generation += 1;
        self.state = IdleState::Disabled;
        TimerCommand::Cancel
    }

    /// Turn the policy on without arming; the next reset arms it.
    pub fn enable(&mut self) -> TimerCommand {
        self.policy.enabled = true;
        TimerCommand::Keep
    }

    pub fn toggle(&mut self) -> TimerCommand {
        if self.policy.enabled {
            self.disable()
        } else {
            self.enable()
        }
    }

    /// One-second display tick. Never touches the pending expiration.
    pub fn tick(&mut self) -> u32 {
        if self.policy.enabled && self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        self.remaining_secs
    }

    /// Expiration callback for `generation`. Returns true only for the
    /// currently armed generation.
    pub fn fire(&mut self, generation: u64) -> bool {
        match self.state {
            IdleState::Armed { generation: armed, .. } if armed == generation => {
                self.state = IdleState::Expired;
                true
            }
            _ => false,
        }
    }
}

impl Default for IdleMachine {
    fn default() -> Self {
        Self::new(TimeoutPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(cmd: TimerCommand) -> (u32, u64) {
        match cmd {
            TimerCommand::Schedule { delay_ms, generation } => (delay_ms, generation),
            other => panic!("expected Schedule, got {:?}", other),
        }
    }

    #[test]
    fn test_one_minute_countdown_scenario() {
        let mut machine = IdleMachine::default();
        let cmd = machine.configure(TimeoutPolicy::from_minutes(true, 1), 0.0);
        assert_eq!(scheduled(cmd).0, 60_000);
        assert_eq!(machine.remaining_secs(), 60);

        for _ in 0..10 {
            machine.tick();
        }
        assert_eq!(machine.remaining_secs(), 50);
        // Ticking leaves the deadline alone
        assert_eq!(machine.deadline_ms(), Some(60_000.0));

        // Activity passes the current timeout back in
        let current = machine.timeout_ms();
        let cmd = machine.reset(10_000.0, Some(current));
        assert_eq!(scheduled(cmd).0, 60_000);
        assert_eq!(machine.remaining_secs(), 60);
        assert_eq!(machine.deadline_ms(), Some(70_000.0));
    }

    #[test]
    fn test_repeated_reset_keeps_one_live_generation() {
        let mut machine = IdleMachine::new(TimeoutPolicy { enabled: true, timeout_ms: 5_000 });
        let (_, first) = scheduled(machine.reset(0.0, None));
        let (_, second) = scheduled(machine.reset(100.0, None));
        let (delay, last) = scheduled(machine.reset(200.0, None));

        assert_eq!(delay, 5_000);
        assert_eq!(machine.deadline_ms(), Some(5_200.0));
        assert!(!machine.fire(first));
        assert!(!machine.fire(second));
        assert!(machine.fire(last));
        assert_eq!(machine.state(), IdleState::Expired);
        // Only once
        assert!(!machine.fire(last));
    }

    #[test]
    fn test_disabled_policy_never_arms() {
        let mut machine = IdleMachine::new(TimeoutPolicy { enabled: false, timeout_ms: 5_000 });
        for step in 0..5 {
            assert_eq!(machine.reset(f64::from(step) * 1_000.0, Some(5_000)), TimerCommand::Cancel);
        }
        assert_eq!(machine.state(), IdleState::Disabled);
        assert!(!machine.fire(machine.generation));
    }

    #[test]
    fn test_enable_does_not_rearm_until_reset() {
        let mut machine = IdleMachine::new(TimeoutPolicy { enabled: true, timeout_ms: 5_000 });
        let (_, armed) = scheduled(machine.reset(0.0, None));

        assert_eq!(machine.toggle(), TimerCommand::Cancel);
        assert!(!machine.is_enabled());
        assert!(!machine.fire(armed));

        assert_eq!(machine.toggle(), TimerCommand::Keep);
        assert!(machine.is_enabled());
        assert_eq!(machine.state(), IdleState::Disabled);

        let (delay, rearmed) = scheduled(machine.reset(1_000.0, None));
        assert_eq!(delay, 5_000);
        assert!(machine.fire(rearmed));
    }

    #[test]
    fn test_tick_stops_at_zero_and_when_disabled() {
        let mut machine = IdleMachine::new(TimeoutPolicy { enabled: true, timeout_ms: 2_000 });
        machine.reset(0.0, Some(2_000));
        assert_eq!(machine.tick(), 1);
        assert_eq!(machine.tick(), 0);
        assert_eq!(machine.tick(), 0);

        machine.reset(0.0, Some(3_000));
        machine.disable();
        assert_eq!(machine.tick(), 3);
    }

    #[test]
    fn test_zero_timeout_is_ignored() {
        let mut machine = IdleMachine::new(TimeoutPolicy { enabled: true, timeout_ms: 4_000 });
        let (delay, _) = scheduled(machine.reset(0.0, Some(0)));
        assert_eq!(delay, 4_000);
        assert_eq!(machine.remaining_secs(), 4);
    }

    #[test]
    fn test_configure_disabled_cancels() {
        let mut machine = IdleMachine::new(TimeoutPolicy { enabled: true, timeout_ms: 4_000 });
        machine.reset(0.0, None);
        let cmd = machine.configure(TimeoutPolicy::from_minutes(false, 30), 10.0);
        assert_eq!(cmd, TimerCommand::Cancel);
        assert_eq!(machine.timeout_ms(), 30 * MS_PER_MINUTE);
        assert_eq!(machine.remaining_secs(), 1_800);
        assert_eq!(machine.deadline_ms(), None);
    }

    #[test]
    fn test_huge_timeout_is_capped_to_browser_limit() {
        let mut machine = IdleMachine::default();
        let (delay_ms, _) = scheduled(machine.configure(TimeoutPolicy::from_minutes(true, 40_000), 0.0));
        assert_eq!(delay_ms, MAX_DELAY_MS);
        assert!(i32::try_from(delay_ms).is_ok());

        let (delay_ms, _) = scheduled(machine.reset(0.0, Some(u32::MAX)));
        assert_eq!(delay_ms, MAX_DELAY_MS);
        assert_eq!(machine.timeout_ms(), MAX_DELAY_MS);
    }
}
