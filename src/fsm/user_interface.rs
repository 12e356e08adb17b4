//! Setup/interaction state machine.
//!
//! Translates front-panel buttons and door edges into cook-controller
//! commands, display updates and light changes.  Owns the setup
//! [`Selection`] and the door interlock: while the door is open every
//! button is ignored.
//!
//! | State        | Power            | Time            | Start/Cancel          | Door open          | Door close |
//! |--------------|------------------|-----------------|-----------------------|--------------------|------------|
//! | Ready        | → SettingPower   | ignored         | clear, reset          | light on           | ignored    |
//! | SettingPower | next level       | → SettingTime   | clear, reset → Ready  | light on, clear    | ignored    |
//! | SettingTime  | ignored          | +1 minute       | → Cooking             | light on, clear    | ignored    |
//! | Cooking      | ignored          | ignored         | stop → Ready          | stop, clear        | ignored    |
//! | DoorOpen     | ignored          | ignored         | ignored               | ignored            | → Ready    |

use log::{error, info, warn};

use crate::app::events::OvenEvent;
use crate::app::ports::{DisplayPort, EventSink, LightPort, OvenHardware};
use crate::config::{OvenConfig, PowerRange};
use crate::error::{DeviceError, Error};

use super::context::Selection;
use super::cook_controller::CookController;
use super::{Handled, OvenState};

pub struct UserInterface {
    state: OvenState,
    selection: Selection,
    range: PowerRange,
    secs_per_minute: u32,
}

impl UserInterface {
    /// Door position is authoritative: an open door starts in `DoorOpen`.
    pub fn new(config: &OvenConfig, door_open: bool) -> Self {
        Self {
            state: if door_open {
                OvenState::DoorOpen
            } else {
                OvenState::Ready
            },
            selection: Selection::default(),
            range: config.power_range(),
            secs_per_minute: config.time_step_secs,
        }
    }

    pub fn state(&self) -> OvenState {
        self.state
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn door_open(&self) -> bool {
        self.state == OvenState::DoorOpen
    }

    // ── Buttons ───────────────────────────────────────────────

    pub fn on_power_pressed(&mut self, hw: &mut impl DisplayPort) -> Handled {
        match self.state {
            OvenState::Ready | OvenState::SettingPower => {
                let watts = self.selection.bump_power(&self.range);
                hw.show_power(watts);
                self.set_state(OvenState::SettingPower);
                Handled::Applied
            }
            _ => Handled::Ignored,
        }
    }

    pub fn on_time_pressed(&mut self, hw: &mut impl DisplayPort) -> Handled {
        match self.state {
            OvenState::SettingPower | OvenState::SettingTime => {
                let minutes = self.selection.bump_minutes();
                hw.show_time(minutes, 0);
                self.set_state(OvenState::SettingTime);
                Handled::Applied
            }
            _ => Handled::Ignored,
        }
    }

    pub fn on_start_cancel_pressed(
        &mut self,
        cooker: &mut CookController,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Handled {
        match self.state {
            OvenState::Ready | OvenState::SettingPower => {
                // Power or time not selected yet: cancel the setup.
                hw.clear_display();
                self.reset_to_ready();
                Handled::Applied
            }
            OvenState::SettingTime => {
                self.start_cooking(cooker, hw, sink);
                Handled::Applied
            }
            OvenState::Cooking => {
                if cooker.stop(hw) {
                    sink.emit(&OvenEvent::CookingCancelled);
                }
                hw.turn_off_light();
                hw.clear_display();
                self.reset_to_ready();
                Handled::Applied
            }
            OvenState::DoorOpen => Handled::Ignored,
        }
    }

    // ── Door ──────────────────────────────────────────────────

    pub fn on_door_opened(
        &mut self,
        cooker: &mut CookController,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Handled {
        match self.state {
            OvenState::DoorOpen => return Handled::Ignored,
            OvenState::Ready => {
                hw.turn_on_light();
            }
            OvenState::SettingPower | OvenState::SettingTime => {
                hw.turn_on_light();
                hw.clear_display();
                self.selection.reset();
            }
            OvenState::Cooking => {
                // Session ends before the state changes.
                if cooker.stop(hw) {
                    sink.emit(&OvenEvent::CookingCancelled);
                }
                hw.turn_on_light();
                hw.clear_display();
                self.selection.reset();
            }
        }
        self.set_state(OvenState::DoorOpen);
        Handled::Applied
    }

    pub fn on_door_closed(&mut self, hw: &mut impl LightPort) -> Handled {
        if self.state != OvenState::DoorOpen {
            return Handled::Ignored;
        }
        hw.turn_off_light();
        self.set_state(OvenState::Ready);
        Handled::Applied
    }

    // ── Notices from the cook controller and devices ─────────

    /// Normal end of cooking.  Duplicates are ignored.
    pub fn cooking_is_done(&mut self, hw: &mut (impl LightPort + DisplayPort)) -> Handled {
        if self.state != OvenState::Cooking {
            return Handled::Ignored;
        }
        hw.turn_off_light();
        hw.clear_display();
        self.reset_to_ready();
        Handled::Applied
    }

    /// A device failed.  A live session is aborted and the UI winds down
    /// as if cooking had been cancelled; setup and door states are kept.
    pub fn on_device_fault(
        &mut self,
        fault: DeviceError,
        cooker: &mut CookController,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Handled {
        error!("Device fault: {}", fault);
        cooker.abort(hw);
        sink.emit(&OvenEvent::Fault(fault));
        if self.state == OvenState::Cooking {
            hw.turn_off_light();
            hw.clear_display();
            self.reset_to_ready();
        }
        Handled::Applied
    }

    // ── Internal ──────────────────────────────────────────────

    fn start_cooking(
        &mut self,
        cooker: &mut CookController,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) {
        let Some(wattage) = self.selection.power_w() else {
            warn!("Start pressed in SettingTime with no power selected");
            hw.clear_display();
            self.reset_to_ready();
            return;
        };
        let Some(duration_secs) = self.selection.duration_secs(self.secs_per_minute) else {
            warn!("Selected time does not fit in a cook duration");
            hw.clear_display();
            self.reset_to_ready();
            return;
        };

        hw.turn_on_light();
        match cooker.start_cooking(wattage, duration_secs, hw) {
            Ok(()) => {
                sink.emit(&OvenEvent::CookingStarted {
                    wattage,
                    duration_secs,
                });
                self.set_state(OvenState::Cooking);
            }
            Err(e) => {
                warn!("Cooking refused: {}", e);
                if let Error::Device(fault) = e {
                    sink.emit(&OvenEvent::Fault(fault));
                }
                hw.turn_off_light();
                hw.clear_display();
                self.reset_to_ready();
            }
        }
    }

    fn reset_to_ready(&mut self) {
        self.selection.reset();
        self.set_state(OvenState::Ready);
    }

    fn set_state(&mut self, next: OvenState) {
        if next != self.state {
            info!("UI transition: {} -> {}", self.state, next);
            self.state = next;
        }
    }
}
