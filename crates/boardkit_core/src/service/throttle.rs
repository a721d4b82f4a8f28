//! Timer-gated coalescing for drag-hover recomputation.
//!
//! # Responsibility
//! - Bound how often the hover-phase handler recomputes state.
//!
//! # Invariants
//! - Dropping gated events never affects correctness; every accepted event
//!   recomputes from the latest committed state.
//! - The gate has no notion of pending work: rejected events are gone.

use std::time::{Duration, Instant};

/// Gate interval matching the UI hover throttle.
pub const DEFAULT_HOVER_INTERVAL: Duration = Duration::from_millis(200);

/// Leading-edge rate gate: the first event fires immediately, later events
/// inside the interval are dropped.
#[derive(Debug)]
pub struct ThrottleGate {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl ThrottleGate {
    /// Creates a gate with the given minimum interval between accepted
    /// events.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Returns whether an event arriving now should be processed.
    pub fn try_accept(&mut self) -> bool {
        self.accept_at(Instant::now())
    }

    /// Clears gate state so the next event fires immediately.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }

    fn accept_at(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::new(DEFAULT_HOVER_INTERVAL)
    }
}
