//! Safety supervisor.
//!
//! The supervisor runs **after every input** and re-derives a fault
//! bitmask from a snapshot of the oven and its devices.  The
//! [`Oven`](crate::app::service::Oven) reacts to the returned mask:
//!
//! - a tube fault forces the cook session down and the tube off;
//! - a light mismatch is corrected in place.
//!
//! Faults are level-triggered: once the condition is gone the bit is
//! cleared on the next evaluation, so several faults can be active at
//! once and each is logged exactly once on entry and once on exit.

use log::{error, info};

use crate::error::SafetyFault;

/// What the supervisor looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OvenSnapshot {
    pub door_open: bool,
    /// The cook controller holds a live session.
    pub cooking: bool,
    pub tube_on: bool,
    pub light_on: bool,
}

impl OvenSnapshot {
    /// Light must be on exactly when the door is open or the oven is cooking.
    pub fn light_expected(&self) -> bool {
        self.door_open || self.cooking
    }
}

#[derive(Debug, Default)]
pub struct SafetySupervisor {
    /// Latched fault bitmask.
    faults: u8,
}

impl SafetySupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate all invariants against `snap`.  Returns the updated mask.
    pub fn evaluate(&mut self, snap: &OvenSnapshot) -> u8 {
        // ── Door interlock ────────────────────────────────────────
        self.eval_fault(SafetyFault::TubeOnDoorOpen, snap.tube_on && snap.door_open);

        // ── Tube without a session ───────────────────────────────
        self.eval_fault(SafetyFault::TubeOnWhileIdle, snap.tube_on && !snap.cooking);

        // ── Cavity light ─────────────────────────────────────────
        self.eval_fault(
            SafetyFault::LightMismatch,
            snap.light_on != snap.light_expected(),
        );

        self.faults
    }

    pub fn faults(&self) -> u8 {
        self.faults
    }

    pub fn has_faults(&self) -> bool {
        self.faults != 0
    }

    pub fn has_fault(&self, fault: SafetyFault) -> bool {
        self.faults & fault.mask() != 0
    }

    /// Any fault that requires the tube to be forced off.
    pub fn tube_fault(&self) -> bool {
        self.has_fault(SafetyFault::TubeOnDoorOpen) || self.has_fault(SafetyFault::TubeOnWhileIdle)
    }

    // ── Internal ──────────────────────────────────────────────────

    fn eval_fault(&mut self, fault: SafetyFault, condition: bool) {
        if condition {
            if self.faults & fault.mask() == 0 {
                error!("SAFETY FAULT SET: {fault}");
            }
            self.faults |= fault.mask();
        } else {
            if self.faults & fault.mask() != 0 {
                info!("SAFETY FAULT CLEARED: {fault}");
            }
            self.faults &= !fault.mask();
        }
    }
}
