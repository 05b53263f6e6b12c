use gloo_timers::callback::Interval;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvanceState {
    Running,
    Cancelled,
}

/// Auto-advance policy: tick until the first manual input, then stop for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    interval_ms: u32,
    state: AutoAdvanceState,
}

impl AutoAdvance {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            state: AutoAdvanceState::Running,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[cfg(test)]
    pub fn state(&self) -> AutoAdvanceState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoAdvanceState::Running
    }

    /// Whether a timer tick should advance. Ticks that were already queued
    /// when the user took over are dropped here.
    pub fn on_tick(&self) -> bool {
        self.is_running()
    }

    /// Returns true only for the input that actually stopped the timer.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = AutoAdvanceState::Cancelled;
        was_running
    }
}

/// Owns the browser interval. Dropping the handle clears it.
pub struct AutoAdvanceTimer {
    handle: Option<Interval>,
}

impl AutoAdvanceTimer {
    /// Arms the interval only if the policy is still running.
    pub fn start<F>(policy: &AutoAdvance, on_tick: F) -> Self
    where
        F: Fn() + 'static,
    {
        let handle = policy
            .is_running()
            .then(|| Interval::new(policy.interval_ms(), on_tick));
        Self { handle }
    }

    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            debug!("auto-advance stopped by manual input");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_until_first_manual_input() {
        let mut policy = AutoAdvance::new(6_000);
        assert!(policy.on_tick());
        assert!(policy.on_tick());

        assert!(policy.cancel());
        assert!(!policy.on_tick());
        assert_eq!(policy.state(), AutoAdvanceState::Cancelled);
    }

    #[test]
    fn later_manual_input_does_not_rearm() {
        let mut policy = AutoAdvance::new(6_000);
        policy.cancel();
        assert!(!policy.cancel());
        assert!(!policy.cancel());
        assert!(!policy.on_tick());
        assert_eq!(policy.interval_ms(), 6_000);
    }
}
