//! Oven state machines.
//!
//! Two cooperating machines share one owned value inside the
//! [`Oven`](crate::app::service::Oven):
//!
//! ```text
//!                  ┌───────────── door opened (any state) ─────────────┐
//!                  ▼                                                   │
//!  ┌──────────┐ closed ┌───────┐ power ┌──────────────┐ time ┌─────────────┐
//!  │ DoorOpen │───────▶│ Ready │──────▶│ SettingPower │─────▶│ SettingTime │
//!  └──────────┘        └───────┘       └──────────────┘      └─────────────┘
//!                        ▲   ▲     start/cancel │                  │ start
//!                        │   └──────────────────┘                  ▼
//!                        │      cancel / done / fault         ┌─────────┐
//!                        └────────────────────────────────────│ Cooking │
//!                                                             └─────────┘
//! ```
//!
//! - [`user_interface::UserInterface`] owns the setup substates and the
//!   door interlock.
//! - [`cook_controller::CookController`] owns the cook session (Idle /
//!   Cooking) and drives the power tube, timer and countdown display.
//!
//! The controller never calls back into the UI: it returns a
//! [`cook_controller::CookerNotice`] which the service dispatches.

pub mod context;
pub mod cook_controller;
pub mod user_interface;

use core::fmt;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all oven states.  Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OvenState {
    Ready = 0,
    DoorOpen = 1,
    SettingPower = 2,
    SettingTime = 3,
    Cooking = 4,
}

impl OvenState {
    /// Total number of states.
    pub const COUNT: usize = 5;

    /// Human-readable state name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::DoorOpen => "DoorOpen",
            Self::SettingPower => "SettingPower",
            Self::SettingTime => "SettingTime",
            Self::Cooking => "Cooking",
        }
    }
}

impl fmt::Display for OvenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of offering an input to a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The input changed state or drove a device.
    Applied,
    /// The input has no meaning in the current state (interlock, stale
    /// timer event, duplicate notice) and was dropped.
    Ignored,
}
