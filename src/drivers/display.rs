//! Front-panel display.
//!
//! Tracks what is currently shown so that redrawing identical content
//! and blanking an already blank panel produce no output.

use crate::app::events::OutputEvent;
use crate::app::ports::OutputSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayContent {
    #[default]
    Blank,
    Power(u32),
    Time { minutes: u32, seconds: u32 },
}

#[derive(Debug, Default)]
pub struct Display {
    content: DisplayContent,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_power(&mut self, watts: u32, out: &mut impl OutputSink) {
        self.show(DisplayContent::Power(watts), OutputEvent::ShowPower(watts), out);
    }

    pub fn show_time(&mut self, minutes: u32, seconds: u32, out: &mut impl OutputSink) {
        self.show(
            DisplayContent::Time { minutes, seconds },
            OutputEvent::ShowTime { minutes, seconds },
            out,
        );
    }

    pub fn clear(&mut self, out: &mut impl OutputSink) {
        self.show(DisplayContent::Blank, OutputEvent::DisplayCleared, out);
    }

    pub fn content(&self) -> DisplayContent {
        self.content
    }

    fn show(&mut self, next: DisplayContent, event: OutputEvent, out: &mut impl OutputSink) {
        if self.content != next {
            self.content = next;
            out.output(event);
        }
    }
}
