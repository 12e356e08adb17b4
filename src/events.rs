//! Control queue.
//!
//! Every input reaches the oven through one bounded channel consumed by
//! the control thread.  Producers are the front panel, the door sensor
//! and the countdown thread.
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌────────────────┐
//! │ Buttons     │────▶│               │     │                │
//! │ Door sensor │────▶│  InputQueue   │────▶│ Control thread │
//! │ Timer task  │────▶│ (embassy-sync)│     │ (owns Oven)    │
//! └─────────────┘     └───────────────┘     └────────────────┘
//! ```
//!
//! Each runtime owns its own queue, so several ovens can coexist in one
//! process (the threaded tests rely on this).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

// Links the host `critical-section` implementation backing the channel.
use critical_section as _;

use crate::app::commands::OvenInput;

/// Maximum number of pending control messages.
pub const INPUT_QUEUE_DEPTH: usize = 32;

/// Messages consumed by the control thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMsg {
    Input(OvenInput),
    /// Stop the control thread after tearing the oven down.
    Shutdown,
}

pub type InputQueue = Channel<CriticalSectionRawMutex, ControlMsg, INPUT_QUEUE_DEPTH>;

/// Non-blocking enqueue of an input.  Returns `false` (and logs) if the
/// queue is full and the input was dropped.
pub fn push_input(queue: &InputQueue, input: impl Into<OvenInput>) -> bool {
    let input = input.into();
    if queue.try_send(ControlMsg::Input(input)).is_err() {
        warn!("Control queue full, dropping {:?}", input);
        return false;
    }
    true
}
