//! Port traits: the hexagonal boundary between the control core and the devices.
//!
//! ```text
//!   Oven (domain) ──▶ Port trait ──▶ Driver / mock
//! ```
//!
//! Driven adapters (power tube, timer, display, light, event sinks)
//! implement these traits.  The [`Oven`](super::service::Oven) consumes
//! them via generics, so the core never touches a device directly and
//! tests can substitute recording mocks.
//!
//! ## Contract notes
//!
//! - **PowerTubePort::turn_on_tube** rejects a second start and any
//!   wattage outside the tube's range; it never clamps.
//! - **TimerPort::start_timer** rejects a start while a countdown is
//!   running.  Events of a countdown carry the [`TimerEpoch`] it returned.
//! - Every off/stop/clear operation is idempotent.

use crate::error::DeviceError;

use super::events::{OutputEvent, OvenEvent};

// ───────────────────────────────────────────────────────────────
// Timer epoch
// ───────────────────────────────────────────────────────────────

/// Identifies one countdown.  A fresh epoch is issued by every successful
/// [`TimerPort::start_timer`]; events from an older countdown are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerEpoch(pub u64);

// ───────────────────────────────────────────────────────────────
// Device ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The heating element.
pub trait PowerTubePort {
    /// Energise at `wattage`.
    fn turn_on_tube(&mut self, wattage: u32) -> Result<(), DeviceError>;

    /// De-energise.  No-op if already off.
    fn turn_off_tube(&mut self);

    /// Whether the tube is currently energised.
    fn is_tube_on(&self) -> bool;
}

/// The one-second countdown.
pub trait TimerPort {
    /// Begin counting down `duration_secs`.  Ticks and expiry are
    /// delivered later as [`TimerEvent`](super::commands::TimerEvent)s.
    fn start_timer(&mut self, duration_secs: u32) -> Result<TimerEpoch, DeviceError>;

    /// Halt the countdown.  No-op if not running.
    fn stop_timer(&mut self);

    /// Whether a countdown is in progress.
    fn is_timer_running(&self) -> bool;
}

/// The front-panel display.
pub trait DisplayPort {
    /// Show the selected power level.
    fn show_power(&mut self, watts: u32);

    /// Show a `mm:ss` time.
    fn show_time(&mut self, minutes: u32, seconds: u32);

    /// Blank the display.
    fn clear_display(&mut self);
}

/// The cavity light.
pub trait LightPort {
    fn turn_on_light(&mut self);

    fn turn_off_light(&mut self);

    fn is_light_on(&self) -> bool;
}

/// Everything the oven drives.  Blanket-implemented for any type that
/// provides all four device ports.
pub trait OvenHardware: PowerTubePort + TimerPort + DisplayPort + LightPort {}

impl<T: PowerTubePort + TimerPort + DisplayPort + LightPort> OvenHardware for T {}

// ───────────────────────────────────────────────────────────────
// Event sink ports (driven adapters: domain → logging / output)
// ───────────────────────────────────────────────────────────────

/// The oven emits structured [`OvenEvent`]s through this port.
/// Adapters decide where they go (log, test recorder, …).
pub trait EventSink {
    fn emit(&mut self, event: &OvenEvent);
}

/// Device drivers report what they physically did through this port.
pub trait OutputSink {
    fn output(&mut self, event: OutputEvent);
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn output(&mut self, event: OutputEvent) {
        (**self).output(event);
    }
}

impl OutputSink for Vec<OutputEvent> {
    fn output(&mut self, event: OutputEvent) {
        self.push(event);
    }
}
