//! Threaded oven runtime.
//!
//! Wires one [`Oven`] to real drivers and runs it on a dedicated control
//! thread:
//!
//! ```text
//!   OvenRuntime (handle)                control thread
//!   ────────────────────                ──────────────────────────────
//!   press() ─▶ ButtonPanel ─┐
//!   open_door() ─▶ Door ────┼─▶ InputQueue ─▶ Oven::handle ─▶ HardwareAdapter
//!   send() ─────────────────┘        ▲                          │
//!                                    └──── ThreadTimer ◀────────┘
//! ```
//!
//! The control thread is the only owner of the oven and its devices;
//! everything else talks to it through the queue.  A copy of the latest
//! [`OvenStatus`] is published after every input for observers.

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::adapters::hardware::HardwareAdapter;
use crate::adapters::log_sink::LogEventSink;
use crate::app::commands::{ButtonId, OvenInput};
use crate::app::events::OvenStatus;
use crate::app::ports::OutputSink;
use crate::app::service::Oven;
use crate::config::OvenConfig;
use crate::drivers::button::ButtonPanel;
use crate::drivers::door::{DoorSensor, SimPin};
use crate::drivers::timer::ThreadTimer;
use crate::error::{DeviceError, Error, Result};
use crate::events::{push_input, ControlMsg, InputQueue};

/// Polling interval of [`OvenRuntime::wait_for`].
const WAIT_POLL: Duration = Duration::from_millis(2);

pub struct OvenRuntime {
    queue: Arc<InputQueue>,
    status: Arc<Mutex<OvenStatus>>,
    door_pin: SimPin,
    door: Mutex<DoorSensor<SimPin>>,
    buttons: Mutex<ButtonPanel>,
    epoch: Instant,
    control: Option<JoinHandle<()>>,
}

impl OvenRuntime {
    /// Validate `config`, start the control thread and bring the oven up.
    pub fn spawn<O>(config: OvenConfig, output: O) -> Result<Self>
    where
        O: OutputSink + Send + 'static,
    {
        config.validate()?;

        let queue = Arc::new(InputQueue::new());
        let door_pin = SimPin::new(config.door_open_at_start);
        let door = DoorSensor::new(door_pin.clone());
        let door_open = door.is_open();

        let mut oven = Oven::with_door(&config, door_open);
        let status = Arc::new(Mutex::new(oven.status()));

        let control = {
            let queue = queue.clone();
            let status = status.clone();
            let config = config.clone();
            std::thread::Builder::new()
                .name("oven-control".into())
                .spawn(move || {
                    let tick = Duration::from_millis(config.tick_interval_ms);
                    let timer = ThreadTimer::new(queue.clone(), tick);
                    let hw = HardwareAdapter::new(&config, timer, output);
                    run_control(&mut oven, hw, &queue, &status);
                })
                .map_err(|_| Error::Device(DeviceError::Fault("control thread spawn failed")))?
        };

        info!(
            "Oven runtime up (tick={} ms, debounce={} ms)",
            config.tick_interval_ms, config.button_debounce_ms
        );

        Ok(Self {
            queue,
            status,
            door_pin,
            door: Mutex::new(door),
            buttons: Mutex::new(ButtonPanel::new(config.button_debounce_ms)),
            epoch: Instant::now(),
            control: Some(control),
        })
    }

    // ── Inputs ────────────────────────────────────────────────

    /// A raw button press.  Waits for queue space, so an accepted press is
    /// never lost.  Returns `false` if it was debounced away or the control
    /// thread is gone.
    pub fn press(&self, id: ButtonId) -> bool {
        let now_ms = self.epoch.elapsed().as_millis() as u32;
        let accepted = match self.buttons.lock() {
            Ok(mut panel) => panel.press(id, now_ms),
            Err(poisoned) => poisoned.into_inner().press(id, now_ms),
        };
        accepted.is_some_and(|input| self.deliver(input))
    }

    pub fn open_door(&self) -> bool {
        self.set_door(true)
    }

    pub fn close_door(&self) -> bool {
        self.set_door(false)
    }

    /// Enqueue any input as-is, without waiting.  Returns `false` if the
    /// queue was full and the input was dropped.
    pub fn send(&self, input: impl Into<OvenInput>) -> bool {
        push_input(&self.queue, input)
    }

    // ── Observation ───────────────────────────────────────────

    /// Status as of the last input the control thread finished.
    pub fn status(&self) -> OvenStatus {
        match self.status.lock() {
            Ok(status) => *status,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Poll [`status`](Self::status) until `pred` holds or `timeout`
    /// passes.  Returns whether it held.
    pub fn wait_for(&self, timeout: Duration, pred: impl Fn(&OvenStatus) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if pred(&self.status()) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(WAIT_POLL);
        }
    }

    // ── Teardown ──────────────────────────────────────────────

    /// Stop the control thread.  The oven is shut down (tube off, timer
    /// stopped, light off) before the thread exits.
    pub fn shutdown(mut self) {
        self.stop_control();
    }

    fn stop_control(&mut self) {
        let Some(handle) = self.control.take() else {
            return;
        };
        if !handle.is_finished() {
            futures_lite::future::block_on(self.queue.send(ControlMsg::Shutdown));
        }
        if handle.join().is_err() {
            warn!("Control thread panicked");
        }
    }

    fn set_door(&self, open: bool) -> bool {
        self.door_pin.set_high(open);
        let edge = match self.door.lock() {
            Ok(mut door) => door.poll(),
            Err(poisoned) => poisoned.into_inner().poll(),
        };
        edge.is_some_and(|ev| self.deliver(ev))
    }

    /// Blocking enqueue for front-panel and door inputs.  The sensor and
    /// debounce state are already committed, so these must not be dropped.
    fn deliver(&self, input: impl Into<OvenInput>) -> bool {
        if self.control.as_ref().is_none_or(JoinHandle::is_finished) {
            warn!("Control thread not running, input dropped");
            return false;
        }
        futures_lite::future::block_on(self.queue.send(ControlMsg::Input(input.into())));
        true
    }
}

impl Drop for OvenRuntime {
    fn drop(&mut self) {
        self.stop_control();
    }
}

// ── Control thread ───────────────────────────────────────────

fn run_control<O: OutputSink>(
    oven: &mut Oven,
    mut hw: HardwareAdapter<ThreadTimer, O>,
    queue: &InputQueue,
    status: &Mutex<OvenStatus>,
) {
    let mut sink = LogEventSink::new();
    oven.start(&mut hw, &mut sink);
    publish(status, oven.status());

    loop {
        match futures_lite::future::block_on(queue.receive()) {
            ControlMsg::Input(input) => {
                oven.handle(input, &mut hw, &mut sink);
                publish(status, oven.status());
            }
            ControlMsg::Shutdown => break,
        }
    }

    oven.shutdown(&mut hw);
    publish(status, oven.status());
    info!("Control thread exiting");
}

fn publish(status: &Mutex<OvenStatus>, next: OvenStatus) {
    match status.lock() {
        Ok(mut s) => *s = next,
        Err(poisoned) => *poisoned.into_inner() = next,
    }
}
