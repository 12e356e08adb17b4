//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every [`OvenEvent`] as one tagged
//! line through the `log` facade.  Whatever logger the binary installs
//! decides where the lines end up.

use log::{debug, error, info, warn};

use crate::app::events::OvenEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`OvenEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &OvenEvent) {
        match event {
            OvenEvent::Started(state) => {
                info!("START | initial_state={}", state);
            }
            OvenEvent::StateChanged { from, to } => {
                info!("STATE | {} -> {}", from, to);
            }
            OvenEvent::CookingStarted {
                wattage,
                duration_secs,
            } => {
                info!("COOK  | started {} W for {} s", wattage, duration_secs);
            }
            OvenEvent::CookingFinished => {
                info!("COOK  | finished");
            }
            OvenEvent::CookingCancelled => {
                info!("COOK  | cancelled");
            }
            OvenEvent::InputIgnored { input, state } => {
                debug!("INPUT | {:?} ignored in {}", input, state);
            }
            OvenEvent::Fault(fault) => {
                warn!("FAULT | device: {}", fault);
            }
            OvenEvent::SafetyFault(flags) => {
                error!("FAULT | safety, flags=0b{:08b}", flags);
            }
        }
    }
}

/// Sink for callers that need no events.
#[derive(Debug, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&mut self, _event: &OvenEvent) {}
}
