//! Console output of the real drivers, end to end.
//!
//! The oven runs against the production [`HardwareAdapter`] (power tube,
//! light and display drivers) writing into a [`RecordingOutput`].  The
//! countdown is driven by hand through a manual timer, so no test sleeps.

use microwave::adapters::hardware::HardwareAdapter;
use microwave::adapters::log_sink::NullEventSink;
use microwave::adapters::text_output::RecordingOutput;
use microwave::app::ports::{TimerEpoch, TimerPort};
use microwave::app::service::Oven;
use microwave::config::OvenConfig;
use microwave::drivers::display::DisplayContent;
use microwave::error::DeviceError;
use microwave::fsm::OvenState;

use crate::mock_hw::{CLOSE, OPEN, POWER, START, TIME, expired, tick};

// ── Manual timer ─────────────────────────────────────────────

#[derive(Default)]
struct ManualTimer {
    running: Option<(TimerEpoch, u32)>,
    next: u64,
}

impl TimerPort for ManualTimer {
    fn start_timer(&mut self, duration_secs: u32) -> Result<TimerEpoch, DeviceError> {
        if self.running.is_some() {
            return Err(DeviceError::TimerBusy);
        }
        self.next += 1;
        let epoch = TimerEpoch(self.next);
        self.running = Some((epoch, duration_secs));
        Ok(epoch)
    }

    fn stop_timer(&mut self) {
        self.running = None;
    }

    fn is_timer_running(&self) -> bool {
        self.running.is_some()
    }
}

struct Bench {
    oven: Oven,
    hw: HardwareAdapter<ManualTimer, RecordingOutput>,
    out: RecordingOutput,
    sink: NullEventSink,
}

impl Bench {
    fn new() -> Self {
        let config = OvenConfig::default();
        let out = RecordingOutput::new();
        let mut bench = Self {
            oven: Oven::new(&config),
            hw: HardwareAdapter::new(&config, ManualTimer::default(), out.clone()),
            out,
            sink: NullEventSink,
        };
        bench.oven.start(&mut bench.hw, &mut bench.sink);
        bench
    }

    fn feed(&mut self, inputs: &[microwave::app::commands::OvenInput]) {
        for input in inputs {
            self.oven.handle(*input, &mut self.hw, &mut self.sink);
        }
    }

    fn press(&mut self, input: microwave::app::commands::OvenInput, n: usize) {
        for _ in 0..n {
            self.feed(&[input]);
        }
    }

    /// Door cycle, `power` power presses, `minutes` time presses, start.
    fn start_cooking(&mut self, power: usize, minutes: usize) {
        self.feed(&[OPEN, CLOSE]);
        self.press(POWER, power);
        self.press(TIME, minutes);
        self.feed(&[START]);
    }

    /// Let `secs` seconds of the running countdown elapse.
    fn elapse(&mut self, secs: u32) {
        let Some((epoch, duration)) = self.hw.timer().running else {
            return;
        };
        let already = duration - self.oven.status().remaining_secs.unwrap_or(duration);
        for n in already + 1..=(already + secs).min(duration) {
            self.feed(&[tick(epoch, duration - n)]);
        }
        if already + secs >= duration {
            // The countdown thread would be done by now.
            self.hw.timer_mut().running = None;
            self.feed(&[expired(epoch)]);
        }
    }

    fn text(&self) -> String {
        self.out.lines().join("\n")
    }
}

// ── Setup output ─────────────────────────────────────────────

#[test]
fn door_open_and_close_toggle_light() {
    let mut b = Bench::new();
    b.feed(&[OPEN]);
    assert!(b.text().contains("Light is turned on"));
    b.feed(&[CLOSE]);
    assert!(b.text().contains("Light is turned off"));
}

#[test]
fn power_presses_print_wattage() {
    for (presses, watts) in [(1, 50), (2, 100), (14, 700), (15, 50), (772, 100)] {
        let mut b = Bench::new();
        b.feed(&[OPEN, CLOSE]);
        b.press(POWER, presses);
        assert_eq!(
            b.out.lines().last().map(String::as_str),
            Some(format!("Display shows: {watts} W").as_str())
        );
    }
}

#[test]
fn time_presses_print_zero_padded_minutes() {
    for presses in [1usize, 2, 9, 10, 60] {
        let mut b = Bench::new();
        b.press(POWER, 1);
        b.press(TIME, presses);
        assert!(
            b.text().contains(&format!("Display shows: {presses:02}:00")),
            "{}",
            b.text()
        );
    }
}

#[test]
fn start_turns_light_on_twice_across_session() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    assert_eq!(b.out.count_containing("Light is turned on"), 2);
}

#[test]
fn start_prints_tube_wattage() {
    for (presses, watts) in [(1, 50), (13, 650), (14, 700), (15, 50), (30, 100)] {
        let mut b = Bench::new();
        b.start_cooking(presses, 1);
        assert!(
            b.text().contains(&format!("PowerTube works with {watts}")),
            "{}",
            b.text()
        );
    }
}

// ── Countdown output ─────────────────────────────────────────

#[test]
fn countdown_shows_remaining_time() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    b.elapse(5);
    assert!(b.text().contains("Display shows: 00:55"));
    b.elapse(5);
    assert!(b.text().contains("Display shows: 00:50"));
}

#[test]
fn countdown_crosses_minute_boundary() {
    let mut b = Bench::new();
    b.start_cooking(1, 10);
    b.elapse(65);
    assert!(b.text().contains("Display shows: 08:55"));
}

#[test]
fn finished_cooking_prints_wind_down() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    b.elapse(60);
    assert_eq!(b.oven.state(), OvenState::Ready);
    assert_eq!(b.out.count_containing("PowerTube turned off"), 1);
    assert_eq!(b.out.count_containing("Display cleared"), 1);
    assert_eq!(b.out.count_containing("Light is turned off"), 2);
    assert_eq!(b.hw.display_content(), DisplayContent::Blank);
}

#[test]
fn display_tracks_last_shown_value() {
    let mut b = Bench::new();
    b.start_cooking(3, 2);
    assert_eq!(
        b.hw.display_content(),
        DisplayContent::Time {
            minutes: 2,
            seconds: 0
        }
    );
    b.elapse(61);
    assert_eq!(
        b.hw.display_content(),
        DisplayContent::Time {
            minutes: 0,
            seconds: 59
        }
    );
}

// ── Extensions ───────────────────────────────────────────────

#[test]
fn cancel_during_setup_clears_display() {
    let mut b = Bench::new();
    b.feed(&[OPEN, CLOSE, POWER, START]);
    assert!(b.text().contains("Display cleared"));
}

#[test]
fn cancel_during_setup_resets_power() {
    let mut b = Bench::new();
    b.feed(&[OPEN, CLOSE, POWER, POWER, START, POWER]);
    assert_eq!(b.out.count_containing("Display shows: 50 W"), 2);
}

#[test]
fn door_open_during_setup_lights_cavity() {
    let mut b = Bench::new();
    b.feed(&[OPEN, CLOSE, POWER, OPEN]);
    assert_eq!(b.out.count_containing("Light is turned on"), 2);
    assert!(b.text().contains("Display cleared"));
}

#[test]
fn door_open_during_setup_resets_power() {
    let mut b = Bench::new();
    b.feed(&[OPEN, CLOSE, POWER, POWER, OPEN, CLOSE, POWER]);
    assert_eq!(b.out.count_containing("Display shows: 50 W"), 2);
}

#[test]
fn cancel_during_cooking_prints_wind_down() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    b.elapse(1);
    b.feed(&[START]);
    assert!(b.text().contains("PowerTube turned off"));
    assert!(b.text().contains("Display cleared"));
    assert_eq!(b.out.count_containing("Light is turned off"), 2);
}

#[test]
fn cancel_during_cooking_resets_power() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    b.feed(&[START, POWER]);
    assert_eq!(b.out.count_containing("Display shows: 50 W"), 2);
}

#[test]
fn door_open_during_cooking_prints_wind_down() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    b.elapse(1);
    b.feed(&[OPEN]);
    assert_eq!(b.out.count_containing("PowerTube turned off"), 1);
    assert!(b.text().contains("Display cleared"));
    assert_eq!(b.oven.state(), OvenState::DoorOpen);
}

#[test]
fn door_open_during_cooking_resets_power() {
    let mut b = Bench::new();
    b.start_cooking(1, 1);
    b.feed(&[OPEN, CLOSE, POWER]);
    assert_eq!(b.out.count_containing("Display shows: 50 W"), 2);
}

#[test]
fn door_cycle_alone_prints_nothing_on_display() {
    let mut b = Bench::new();
    b.feed(&[OPEN, CLOSE]);
    assert_eq!(
        b.out.lines(),
        vec!["Light is turned on".to_owned(), "Light is turned off".to_owned()]
    );
}
