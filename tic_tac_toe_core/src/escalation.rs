//! Rolling-window click counter.
//!
//! Counts events that arrive no more than `window_ms` apart and fires once
//! `threshold` of them have been seen in a row. The window is only checked
//! when the next event arrives; nothing runs in the background.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscalationStep {
    /// More events are needed. `count` includes the one just registered.
    Pending { count: u32, remaining: u32 },
    /// Threshold reached. The counter has already been cleared.
    Triggered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    threshold: u32,
    window_ms: u64,
    count: u32,
    last_event_ms: Option<u64>,
}

impl Escalation {
    pub fn new(threshold: u32, window_ms: u64) -> Self {
        Self {
            threshold,
            window_ms,
            count: 0,
            last_event_ms: None,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn last_event_ms(&self) -> Option<u64> {
        self.last_event_ms
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.last_event_ms = None;
    }

    pub fn register(&mut self, now_ms: u64) -> EscalationStep {
        // A clock that steps backwards counts as inside the window.
        let within_window = self
            .last_event_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= self.window_ms);

        self.count = if within_window { self.count + 1 } else { 1 };
        self.last_event_ms = Some(now_ms);

        if self.count >= self.threshold {
            self.reset();
            EscalationStep::Triggered
        } else {
            EscalationStep::Pending {
                count: self.count,
                remaining: self.threshold - self.count,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_events_trigger_on_threshold() {
        let mut esc = Escalation::new(3, 100);
        assert_eq!(
            esc.register(0),
            EscalationStep::Pending { count: 1, remaining: 2 }
        );
        assert_eq!(
            esc.register(100),
            EscalationStep::Pending { count: 2, remaining: 1 }
        );
        assert_eq!(esc.register(150), EscalationStep::Triggered);
        assert_eq!(esc.count(), 0);
        assert_eq!(esc.last_event_ms(), None);
    }

    #[test]
    fn gap_past_window_restarts_count() {
        let mut esc = Escalation::new(3, 100);
        esc.register(0);
        esc.register(50);
        assert_eq!(
            esc.register(151),
            EscalationStep::Pending { count: 1, remaining: 2 }
        );
        assert_eq!(esc.last_event_ms(), Some(151));
    }

    #[test]
    fn backwards_clock_stays_in_window() {
        let mut esc = Escalation::new(5, 2000);
        esc.register(10_000);
        assert_eq!(
            esc.register(9_000),
            EscalationStep::Pending { count: 2, remaining: 3 }
        );
    }
}
