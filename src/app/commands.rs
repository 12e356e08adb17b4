//! Inbound inputs to the oven.
//!
//! These represent everything the outside world can tell the
//! [`Oven`](super::service::Oven): button presses, door edges, timer
//! notifications and device faults.  They are delivered one at a time.

use crate::app::ports::TimerEpoch;
use crate::error::DeviceError;

/// The three front-panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Power,
    Time,
    StartCancel,
}

/// Door sensor edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    Opened,
    Closed,
}

/// Notifications from a running countdown.  Each carries the epoch
/// returned by the `start` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed; `remaining_secs` left on the countdown.
    Tick {
        epoch: TimerEpoch,
        remaining_secs: u32,
    },
    /// The countdown reached zero.
    Expired { epoch: TimerEpoch },
}

/// Every input the oven accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvenInput {
    Button(ButtonId),
    Door(DoorEvent),
    Timer(TimerEvent),
    /// A device reported an unexpected internal failure.
    DeviceFault(DeviceError),
}

impl From<ButtonId> for OvenInput {
    fn from(id: ButtonId) -> Self {
        Self::Button(id)
    }
}

impl From<DoorEvent> for OvenInput {
    fn from(ev: DoorEvent) -> Self {
        Self::Door(ev)
    }
}

impl From<TimerEvent> for OvenInput {
    fn from(ev: TimerEvent) -> Self {
        Self::Timer(ev)
    }
}
