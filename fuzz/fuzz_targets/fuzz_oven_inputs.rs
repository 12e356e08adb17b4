//! Fuzz the oven with arbitrary input streams.
//!
//! Each byte selects one input; timer events target the live countdown
//! or an older one.  After every input the tube must be on exactly while
//! cooking and the light must match door and cooking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use microwave::adapters::hardware::HardwareAdapter;
use microwave::adapters::log_sink::NullEventSink;
use microwave::app::commands::{ButtonId, DoorEvent, OvenInput, TimerEvent};
use microwave::app::events::OutputEvent;
use microwave::app::ports::{LightPort, PowerTubePort, TimerEpoch, TimerPort};
use microwave::app::service::Oven;
use microwave::config::OvenConfig;
use microwave::error::DeviceError;
use microwave::fsm::OvenState;

#[derive(Default)]
struct ByteTimer {
    running: Option<TimerEpoch>,
    next: u64,
}

impl TimerPort for ByteTimer {
    fn start_timer(&mut self, _duration_secs: u32) -> Result<TimerEpoch, DeviceError> {
        if self.running.is_some() {
            return Err(DeviceError::TimerBusy);
        }
        self.next += 1;
        self.running = Some(TimerEpoch(self.next));
        Ok(TimerEpoch(self.next))
    }

    fn stop_timer(&mut self) {
        self.running = None;
    }

    fn is_timer_running(&self) -> bool {
        self.running.is_some()
    }
}

fuzz_target!(|data: &[u8]| {
    let config = OvenConfig::default();
    let mut oven = Oven::new(&config);
    let mut hw = HardwareAdapter::new(&config, ByteTimer::default(), Vec::<OutputEvent>::new());
    let mut sink = NullEventSink;
    oven.start(&mut hw, &mut sink);

    for &b in data {
        let live = hw.timer().running.unwrap_or(TimerEpoch(0));
        let input: OvenInput = match b % 8 {
            0 => ButtonId::Power.into(),
            1 => ButtonId::Time.into(),
            2 => ButtonId::StartCancel.into(),
            3 => DoorEvent::Opened.into(),
            4 => DoorEvent::Closed.into(),
            5 => TimerEvent::Tick {
                epoch: live,
                remaining_secs: u32::from(b),
            }
            .into(),
            6 => {
                hw.timer_mut().running = None;
                TimerEvent::Expired { epoch: live }.into()
            }
            _ => TimerEvent::Expired {
                epoch: TimerEpoch(live.0.wrapping_sub(1)),
            }
            .into(),
        };
        oven.handle(input, &mut hw, &mut sink);

        let cooking = oven.state() == OvenState::Cooking;
        let door_open = oven.state() == OvenState::DoorOpen;
        assert_eq!(hw.is_tube_on(), cooking);
        assert_eq!(hw.is_light_on(), cooking || door_open);
    }
});
