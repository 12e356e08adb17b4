//! Mock hardware adapter for integration tests.
//!
//! Records every device call so tests can assert on the full command
//! history (order and counts) without any real driver behind the ports.

use microwave::app::commands::{ButtonId, DoorEvent, OvenInput, TimerEvent};
use microwave::app::events::OvenEvent;
use microwave::app::ports::{
    DisplayPort, EventSink, LightPort, PowerTubePort, TimerEpoch, TimerPort,
};
use microwave::error::DeviceError;

// ── Device call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    TubeOn(u32),
    TubeOff,
    TimerStart(u32),
    TimerStop,
    ShowPower(u32),
    ShowTime(u32, u32),
    Clear,
    LightOn,
    LightOff,
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<DeviceCall>,
    pub tube_on: bool,
    pub light_on: bool,
    pub timer_running: bool,
    pub epoch: u64,
    /// Make the next `turn_on_tube` fail with this error.
    pub fail_tube: Option<DeviceError>,
    /// Make the next `start_timer` fail with this error.
    pub fail_timer: Option<DeviceError>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: &DeviceCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last_call(&self) -> Option<&DeviceCall> {
        self.calls.last()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Epoch of the countdown most recently started.
    pub fn current_epoch(&self) -> TimerEpoch {
        TimerEpoch(self.epoch)
    }

    pub fn power_shown(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::ShowPower(w) => Some(*w),
                _ => None,
            })
            .collect()
    }
}

impl PowerTubePort for MockHardware {
    fn turn_on_tube(&mut self, wattage: u32) -> Result<(), DeviceError> {
        self.calls.push(DeviceCall::TubeOn(wattage));
        if let Some(err) = self.fail_tube.take() {
            return Err(err);
        }
        if self.tube_on {
            return Err(DeviceError::TubeAlreadyOn);
        }
        self.tube_on = true;
        Ok(())
    }

    fn turn_off_tube(&mut self) {
        self.calls.push(DeviceCall::TubeOff);
        self.tube_on = false;
    }

    fn is_tube_on(&self) -> bool {
        self.tube_on
    }
}

impl TimerPort for MockHardware {
    fn start_timer(&mut self, duration_secs: u32) -> Result<TimerEpoch, DeviceError> {
        self.calls.push(DeviceCall::TimerStart(duration_secs));
        if let Some(err) = self.fail_timer.take() {
            return Err(err);
        }
        if self.timer_running {
            return Err(DeviceError::TimerBusy);
        }
        self.timer_running = true;
        self.epoch += 1;
        Ok(TimerEpoch(self.epoch))
    }

    fn stop_timer(&mut self) {
        self.calls.push(DeviceCall::TimerStop);
        self.timer_running = false;
    }

    fn is_timer_running(&self) -> bool {
        self.timer_running
    }
}

impl DisplayPort for MockHardware {
    fn show_power(&mut self, watts: u32) {
        self.calls.push(DeviceCall::ShowPower(watts));
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.calls.push(DeviceCall::ShowTime(minutes, seconds));
    }

    fn clear_display(&mut self) {
        self.calls.push(DeviceCall::Clear);
    }
}

impl LightPort for MockHardware {
    fn turn_on_light(&mut self) {
        self.calls.push(DeviceCall::LightOn);
        self.light_on = true;
    }

    fn turn_off_light(&mut self) {
        self.calls.push(DeviceCall::LightOff);
        self.light_on = false;
    }

    fn is_light_on(&self) -> bool {
        self.light_on
    }
}

// ── Event recorder ───────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<OvenEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&OvenEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &OvenEvent) {
        self.events.push(event.clone());
    }
}

// ── Input shorthands ─────────────────────────────────────────

#[allow(dead_code)]
pub const POWER: OvenInput = OvenInput::Button(ButtonId::Power);
#[allow(dead_code)]
pub const TIME: OvenInput = OvenInput::Button(ButtonId::Time);
#[allow(dead_code)]
pub const START: OvenInput = OvenInput::Button(ButtonId::StartCancel);
#[allow(dead_code)]
pub const OPEN: OvenInput = OvenInput::Door(DoorEvent::Opened);
#[allow(dead_code)]
pub const CLOSE: OvenInput = OvenInput::Door(DoorEvent::Closed);

#[allow(dead_code)]
pub fn tick(epoch: TimerEpoch, remaining_secs: u32) -> OvenInput {
    OvenInput::Timer(TimerEvent::Tick {
        epoch,
        remaining_secs,
    })
}

#[allow(dead_code)]
pub fn expired(epoch: TimerEpoch) -> OvenInput {
    OvenInput::Timer(TimerEvent::Expired { epoch })
}
