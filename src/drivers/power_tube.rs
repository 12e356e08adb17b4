//! Power tube (magnetron) driver.
//!
//! Binary heating element: on at a wattage, or off.
//!
//! ## Safety contract
//!
//! The tube must never be on while the door is open.  Enforced by the
//! state machines and re-checked by the safety supervisor; this driver
//! only refuses a second start and out-of-range wattage.

use crate::app::events::OutputEvent;
use crate::app::ports::OutputSink;
use crate::error::DeviceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeState {
    Off,
    On { wattage: u32 },
}

pub struct PowerTube {
    state: TubeState,
    max_w: u32,
}

impl PowerTube {
    pub fn new(max_w: u32) -> Self {
        Self {
            state: TubeState::Off,
            max_w,
        }
    }

    pub fn turn_on(&mut self, wattage: u32, out: &mut impl OutputSink) -> Result<(), DeviceError> {
        if self.is_on() {
            return Err(DeviceError::TubeAlreadyOn);
        }
        if !(1..=self.max_w).contains(&wattage) {
            return Err(DeviceError::WattageOutOfRange(wattage));
        }
        self.state = TubeState::On { wattage };
        out.output(OutputEvent::PowerTubeOn(wattage));
        Ok(())
    }

    pub fn turn_off(&mut self, out: &mut impl OutputSink) {
        if self.is_on() {
            self.state = TubeState::Off;
            out.output(OutputEvent::PowerTubeOff);
        }
    }

    pub fn state(&self) -> TubeState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, TubeState::On { .. })
    }
}
