//! Unified error types for the oven control core.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! dispatch loop's handling uniform.  All variants are `Copy` so they can
//! be passed through the controller, the UI and the safety supervisor
//! without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the control core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A wattage or duration outside its domain.  Rejected, no state change.
    InvalidArgument(&'static str),
    /// An operation that is not legal in the current state (e.g. a second
    /// start while cooking).  Rejected, not fatal.
    InvalidState(&'static str),
    /// A device reported a failure.
    Device(DeviceError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Self::Device(e) => write!(f, "device: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Device errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// Power tube commanded on while already on.
    TubeAlreadyOn,
    /// Power tube wattage outside `1..=max`.
    WattageOutOfRange(u32),
    /// Timer started while a countdown is still running.
    TimerBusy,
    /// Timer started with a zero duration.
    ZeroDuration,
    /// Unexpected internal failure reported by a device.
    Fault(&'static str),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TubeAlreadyOn => write!(f, "power tube already on"),
            Self::WattageOutOfRange(w) => write!(f, "wattage {w} W out of range"),
            Self::TimerBusy => write!(f, "timer already running"),
            Self::ZeroDuration => write!(f, "timer duration is zero"),
            Self::Fault(reason) => write!(f, "fault: {reason}"),
        }
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Self::Device(e)
    }
}

// ---------------------------------------------------------------------------
// Safety faults
// ---------------------------------------------------------------------------

/// Invariant violations detected by the safety supervisor after an input
/// has been handled.  Accumulated in a bitfield so that simultaneous
/// violations are reported together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SafetyFault {
    /// Power tube energised while the door is open.
    TubeOnDoorOpen = 0b0000_0001,
    /// Power tube energised with no cook session.
    TubeOnWhileIdle = 0b0000_0010,
    /// Light state disagrees with door/cooking state.
    LightMismatch = 0b0000_0100,
}

impl SafetyFault {
    /// Return the bitmask for this fault.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SafetyFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TubeOnDoorOpen => write!(f, "power tube on with door open"),
            Self::TubeOnWhileIdle => write!(f, "power tube on while idle"),
            Self::LightMismatch => write!(f, "light state mismatch"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
