//! Values the state machines read and write.
//!
//! [`Selection`] is the setup-phase scratchpad (power and minutes chosen
//! so far); [`CookSession`] is the live heating cycle.  Neither outlives
//! the oven, and neither is persisted.

use crate::app::ports::TimerEpoch;
use crate::config::PowerRange;

// ---------------------------------------------------------------------------
// Setup selection
// ---------------------------------------------------------------------------

/// Power and time chosen during the setup phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected power level; `None` until the first power press.
    power_w: Option<u32>,
    /// Selected whole minutes.
    minutes: u32,
}

impl Selection {
    /// Advance the power level one step, wrapping at the top of `range`.
    pub fn bump_power(&mut self, range: &PowerRange) -> u32 {
        let next = range.next(self.power_w);
        self.power_w = Some(next);
        next
    }

    /// Add one minute.  Saturates instead of wrapping.
    pub fn bump_minutes(&mut self) -> u32 {
        self.minutes = self.minutes.saturating_add(1);
        self.minutes
    }

    /// Back to defaults: nothing selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn power_w(&self) -> Option<u32> {
        self.power_w
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Selected duration in seconds, or `None` if it does not fit.
    pub fn duration_secs(&self, secs_per_minute: u32) -> Option<u32> {
        self.minutes.checked_mul(secs_per_minute)
    }
}

// ---------------------------------------------------------------------------
// Cook session
// ---------------------------------------------------------------------------

/// The live heating cycle.  Created by a successful start, destroyed on
/// expiry or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookSession {
    pub wattage: u32,
    pub duration_secs: u32,
    pub remaining_secs: u32,
    /// Epoch of the countdown driving this session.
    pub epoch: TimerEpoch,
}

impl CookSession {
    /// Remaining time split into display minutes and seconds.
    pub fn remaining_mm_ss(&self) -> (u32, u32) {
        split_mm_ss(self.remaining_secs)
    }
}

/// Split seconds into `(minutes, seconds)` for a `mm:ss` display.
pub fn split_mm_ss(total_secs: u32) -> (u32, u32) {
    (total_secs / 60, total_secs % 60)
}
