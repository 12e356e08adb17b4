//! Debounced front-panel buttons.
//!
//! Raw presses arrive with a millisecond timestamp (from an ISR on the
//! target, from the console or a test on the host).  A press of the same
//! button within the debounce window of its last accepted press is
//! contact bounce and is discarded.
//!
//! | Button       | Input                              |
//! |--------------|------------------------------------|
//! | Power        | `OvenInput::Button(Power)`         |
//! | Time         | `OvenInput::Button(Time)`          |
//! | Start/Cancel | `OvenInput::Button(StartCancel)`   |

use log::debug;

use crate::app::commands::{ButtonId, OvenInput};

const BUTTON_COUNT: usize = 3;

fn slot(id: ButtonId) -> usize {
    match id {
        ButtonId::Power => 0,
        ButtonId::Time => 1,
        ButtonId::StartCancel => 2,
    }
}

pub struct ButtonPanel {
    debounce_ms: u32,
    /// Timestamp of the last accepted press per button.
    last_accept_ms: [Option<u32>; BUTTON_COUNT],
}

impl ButtonPanel {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            last_accept_ms: [None; BUTTON_COUNT],
        }
    }

    /// Classify a raw press at `now_ms` (monotonic, wrapping).
    pub fn press(&mut self, id: ButtonId, now_ms: u32) -> Option<OvenInput> {
        let last = &mut self.last_accept_ms[slot(id)];
        if let Some(prev) = *last {
            if now_ms.wrapping_sub(prev) < self.debounce_ms {
                debug!("{:?} bounce at {} ms dropped", id, now_ms);
                return None;
            }
        }
        *last = Some(now_ms);
        Some(OvenInput::Button(id))
    }
}
