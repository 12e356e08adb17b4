//! Outbound events.
//!
//! Two streams leave the core:
//!
//! - [`OvenEvent`]: structured application events emitted by the
//!   [`Oven`](super::service::Oven) through the
//!   [`EventSink`](super::ports::EventSink) port (state changes, cook
//!   lifecycle, faults).
//! - [`OutputEvent`]: what the devices physically did (light on, display
//!   text, tube power), emitted by the drivers through the
//!   [`OutputSink`](super::ports::OutputSink) port.  A formatting adapter
//!   turns these into human-readable lines.

use crate::app::commands::OvenInput;
use crate::error::DeviceError;
use crate::fsm::OvenState;

/// Structured events emitted by the oven core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OvenEvent {
    /// The oven has started (carries initial state).
    Started(OvenState),

    /// The UI moved between states.
    StateChanged { from: OvenState, to: OvenState },

    /// A cook session began.
    CookingStarted { wattage: u32, duration_secs: u32 },

    /// The countdown expired and the session ended normally.
    CookingFinished,

    /// The session was cut short (cancel button or door).
    CookingCancelled,

    /// An input had no meaning in the current state and was dropped.
    InputIgnored { input: OvenInput, state: OvenState },

    /// A device failed; any live session was terminated.
    Fault(DeviceError),

    /// The safety supervisor found one or more invariant violations.
    SafetyFault(u8),
}

/// Device-level output, one per observable device transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEvent {
    LightOn,
    LightOff,
    ShowPower(u32),
    ShowTime { minutes: u32, seconds: u32 },
    DisplayCleared,
    PowerTubeOn(u32),
    PowerTubeOff,
}

/// A point-in-time view of the oven, for observers outside the control
/// thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvenStatus {
    pub state: OvenState,
    pub power_w: Option<u32>,
    pub minutes: u32,
    pub remaining_secs: Option<u32>,
}
