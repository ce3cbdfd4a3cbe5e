//! Timer-backed gate that keeps an action from repeating too quickly.
//!
//! Each gated action is a two-state machine: READY, then COOLING after
//! `trigger`, then READY again once `duration_ms` has elapsed. The state is
//! derived from the last trigger timestamp, so reading it never mutates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownGate {
    /// How long the gate stays closed after a trigger.
    pub duration_ms: u64,
    /// Timestamp of the most recent trigger. `None` means never triggered.
    pub last_triggered_ms: Option<u64>,
}

impl CooldownGate {
    /// A gate that starts ready.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            last_triggered_ms: None,
        }
    }

    /// A gate that starts cooling as if it had been triggered at `now_ms`.
    pub fn busy(duration_ms: u64, now_ms: u64) -> Self {
        Self {
            duration_ms,
            last_triggered_ms: Some(now_ms),
        }
    }

    pub fn ready(&self, now_ms: u64) -> bool {
        match self.last_triggered_ms {
            None => true,
            Some(last) => now_ms >= last.saturating_add(self.duration_ms),
        }
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.last_triggered_ms = Some(now_ms);
    }

    /// Trigger only if ready. Returns whether the gate fired.
    pub fn try_trigger(&mut self, now_ms: u64) -> bool {
        if self.ready(now_ms) {
            self.trigger(now_ms);
            true
        } else {
            false
        }
    }

    /// Milliseconds until the gate reopens (0 when ready).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.last_triggered_ms {
            None => 0,
            Some(last) => last
                .saturating_add(self.duration_ms)
                .saturating_sub(now_ms),
        }
    }
}
