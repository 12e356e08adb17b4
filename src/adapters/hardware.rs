//! Hardware adapter: bridges the device drivers to the domain ports.
//!
//! Owns the power tube, light and display drivers, a countdown timer and
//! the [`OutputSink`] they report to, and exposes them through the four
//! device ports.  The timer is a type parameter: the runtime plugs in the
//! threaded [`ThreadTimer`](crate::drivers::timer::ThreadTimer), tests
//! can plug in a manual one.

use crate::app::ports::{
    DisplayPort, LightPort, OutputSink, PowerTubePort, TimerEpoch, TimerPort,
};
use crate::config::OvenConfig;
use crate::drivers::display::{Display, DisplayContent};
use crate::drivers::light::Light;
use crate::drivers::power_tube::PowerTube;
use crate::error::DeviceError;

/// Concrete adapter that combines all devices behind the port traits.
pub struct HardwareAdapter<T: TimerPort, O: OutputSink> {
    tube: PowerTube,
    light: Light,
    display: Display,
    timer: T,
    out: O,
}

impl<T: TimerPort, O: OutputSink> HardwareAdapter<T, O> {
    pub fn new(config: &OvenConfig, timer: T, out: O) -> Self {
        Self {
            tube: PowerTube::new(config.tube_max_w),
            light: Light::new(),
            display: Display::new(),
            timer,
            out,
        }
    }

    pub fn display_content(&self) -> DisplayContent {
        self.display.content()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn output(&self) -> &O {
        &self.out
    }
}

// ── PowerTubePort implementation ──────────────────────────────

impl<T: TimerPort, O: OutputSink> PowerTubePort for HardwareAdapter<T, O> {
    fn turn_on_tube(&mut self, wattage: u32) -> Result<(), DeviceError> {
        self.tube.turn_on(wattage, &mut self.out)
    }

    fn turn_off_tube(&mut self) {
        self.tube.turn_off(&mut self.out);
    }

    fn is_tube_on(&self) -> bool {
        self.tube.is_on()
    }
}

// ── TimerPort implementation ──────────────────────────────────

impl<T: TimerPort, O: OutputSink> TimerPort for HardwareAdapter<T, O> {
    fn start_timer(&mut self, duration_secs: u32) -> Result<TimerEpoch, DeviceError> {
        self.timer.start_timer(duration_secs)
    }

    fn stop_timer(&mut self) {
        self.timer.stop_timer();
    }

    fn is_timer_running(&self) -> bool {
        self.timer.is_timer_running()
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<T: TimerPort, O: OutputSink> DisplayPort for HardwareAdapter<T, O> {
    fn show_power(&mut self, watts: u32) {
        self.display.show_power(watts, &mut self.out);
    }

    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.display.show_time(minutes, seconds, &mut self.out);
    }

    fn clear_display(&mut self) {
        self.display.clear(&mut self.out);
    }
}

// ── LightPort implementation ──────────────────────────────────

impl<T: TimerPort, O: OutputSink> LightPort for HardwareAdapter<T, O> {
    fn turn_on_light(&mut self) {
        self.light.turn_on(&mut self.out);
    }

    fn turn_off_light(&mut self) {
        self.light.turn_off(&mut self.out);
    }

    fn is_light_on(&self) -> bool {
        self.light.is_on()
    }
}
