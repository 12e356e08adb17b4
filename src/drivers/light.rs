//! Cavity light.  Emits output only on a real change.

use crate::app::events::OutputEvent;
use crate::app::ports::OutputSink;

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self, out: &mut impl OutputSink) {
        if !self.on {
            self.on = true;
            out.output(OutputEvent::LightOn);
        }
    }

    pub fn turn_off(&mut self, out: &mut impl OutputSink) {
        if self.on {
            self.on = false;
            out.output(OutputEvent::LightOff);
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
