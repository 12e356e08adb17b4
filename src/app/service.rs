//! Application service: the hexagonal core.
//!
//! [`Oven`] owns both state machines and the safety supervisor.  It
//! exposes a hardware-agnostic API: every device is reached through the
//! port traits injected at call sites, so the whole oven runs against
//! mock adapters in tests.
//!
//! ```text
//!   OvenInput ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │             Oven             │
//! OvenHardware ◀──│  UI · CookController · Safety │
//!                 └──────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::OvenConfig;
use crate::fsm::context::{CookSession, Selection};
use crate::fsm::cook_controller::{CookController, CookerNotice, TimerOutcome};
use crate::fsm::user_interface::UserInterface;
use crate::fsm::{Handled, OvenState};
use crate::safety::{OvenSnapshot, SafetySupervisor};

use super::commands::{ButtonId, DoorEvent, OvenInput};
use super::events::{OvenEvent, OvenStatus};
use super::ports::{EventSink, OvenHardware};

// ───────────────────────────────────────────────────────────────
// Oven
// ───────────────────────────────────────────────────────────────

pub struct Oven {
    ui: UserInterface,
    cooker: CookController,
    safety: SafetySupervisor,
    inputs_handled: u64,
}

impl Oven {
    /// Build the oven.  The initial state follows
    /// `config.door_open_at_start`.
    ///
    /// `config` should have passed [`OvenConfig::validate`]; the runtime
    /// checks it before building the oven.  An unvalidated config never
    /// panics here, but may offer fewer power levels than intended.
    ///
    /// Does **not** touch any device; call [`start`](Self::start) next.
    pub fn new(config: &OvenConfig) -> Self {
        Self::with_door(config, config.door_open_at_start)
    }

    /// Build the oven with an explicit initial door position.
    pub fn with_door(config: &OvenConfig, door_open: bool) -> Self {
        Self {
            ui: UserInterface::new(config, door_open),
            cooker: CookController::new(config.power_range()),
            safety: SafetySupervisor::new(),
            inputs_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring the devices in line with the initial state.
    pub fn start(&mut self, hw: &mut impl OvenHardware, sink: &mut impl EventSink) {
        let state = self.ui.state();
        if state == OvenState::DoorOpen {
            hw.turn_on_light();
        }
        sink.emit(&OvenEvent::Started(state));
        info!("Oven started in {}", state);
    }

    /// Stop any live session and switch the light off.
    pub fn shutdown(&mut self, hw: &mut impl OvenHardware) {
        if self.cooker.abort(hw) {
            info!("Cook session terminated by shutdown");
        }
        hw.turn_off_light();
        info!("Oven shut down after {} inputs", self.inputs_handled);
    }

    // ── Input handling ────────────────────────────────────────

    /// Process one input to completion: state machines, then safety.
    pub fn handle(
        &mut self,
        input: OvenInput,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Handled {
        self.inputs_handled += 1;
        let prev_state = self.ui.state();

        let handled = self.dispatch(input, hw, sink);
        if handled == Handled::Ignored {
            debug!("Input {:?} ignored in {}", input, prev_state);
            sink.emit(&OvenEvent::InputIgnored {
                input,
                state: prev_state,
            });
        }

        self.supervise(hw, sink);

        let new_state = self.ui.state();
        if new_state != prev_state {
            sink.emit(&OvenEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }
        handled
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> OvenState {
        self.ui.state()
    }

    pub fn selection(&self) -> Selection {
        self.ui.selection()
    }

    pub fn session(&self) -> Option<&CookSession> {
        self.cooker.session()
    }

    pub fn is_cooking(&self) -> bool {
        self.cooker.is_cooking()
    }

    /// Latest safety fault bitmask.
    pub fn safety_faults(&self) -> u8 {
        self.safety.faults()
    }

    pub fn status(&self) -> OvenStatus {
        let selection = self.ui.selection();
        OvenStatus {
            state: self.ui.state(),
            power_w: selection.power_w(),
            minutes: selection.minutes(),
            remaining_secs: self.cooker.session().map(|s| s.remaining_secs),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn dispatch(
        &mut self,
        input: OvenInput,
        hw: &mut impl OvenHardware,
        sink: &mut impl EventSink,
    ) -> Handled {
        match input {
            OvenInput::Button(ButtonId::Power) => self.ui.on_power_pressed(hw),
            OvenInput::Button(ButtonId::Time) => self.ui.on_time_pressed(hw),
            OvenInput::Button(ButtonId::StartCancel) => {
                self.ui.on_start_cancel_pressed(&mut self.cooker, hw, sink)
            }
            OvenInput::Door(DoorEvent::Opened) => {
                self.ui.on_door_opened(&mut self.cooker, hw, sink)
            }
            OvenInput::Door(DoorEvent::Closed) => self.ui.on_door_closed(hw),
            OvenInput::Timer(event) => match self.cooker.on_timer_event(event, hw) {
                TimerOutcome::Applied(Some(CookerNotice::Done)) => {
                    sink.emit(&OvenEvent::CookingFinished);
                    self.ui.cooking_is_done(hw);
                    Handled::Applied
                }
                outcome => outcome.handled(),
            },
            OvenInput::DeviceFault(fault) => {
                self.ui.on_device_fault(fault, &mut self.cooker, hw, sink)
            }
        }
    }

    /// Re-check the device invariants and repair what is broken.
    fn supervise(&mut self, hw: &mut impl OvenHardware, sink: &mut impl EventSink) {
        let snap = self.snapshot(&*hw);
        let faults = self.safety.evaluate(&snap);
        if faults == 0 {
            return;
        }
        warn!("Safety fault! flags=0b{:08b}", faults);
        sink.emit(&OvenEvent::SafetyFault(faults));

        if self.safety.tube_fault() {
            self.cooker.abort(hw);
            // UI must not stay in Cooking without a session.
            self.ui.cooking_is_done(hw);
        }

        let snap = self.snapshot(&*hw);
        if snap.light_on != snap.light_expected() {
            if snap.light_expected() {
                hw.turn_on_light();
            } else {
                hw.turn_off_light();
            }
        }

        let snap = self.snapshot(&*hw);
        self.safety.evaluate(&snap);
    }

    fn snapshot(&self, hw: &impl OvenHardware) -> OvenSnapshot {
        OvenSnapshot {
            door_open: self.ui.door_open(),
            cooking: self.cooker.is_cooking(),
            tube_on: hw.is_tube_on(),
            light_on: hw.is_light_on(),
        }
    }
}
