//! Text output adapter.
//!
//! Renders each [`OutputEvent`] as one human-readable line, the console
//! format of the oven front panel:
//!
//! | Event                | Line                          |
//! |----------------------|-------------------------------|
//! | `LightOn`            | `Light is turned on`          |
//! | `LightOff`           | `Light is turned off`         |
//! | `ShowPower(w)`       | `Display shows: {w} W`        |
//! | `ShowTime{m, s}`     | `Display shows: {mm}:{ss}`    |
//! | `DisplayCleared`     | `Display cleared`             |
//! | `PowerTubeOn(w)`     | `PowerTube works with {w}`    |
//! | `PowerTubeOff`       | `PowerTube turned off`        |

use core::fmt::Write as _;
use std::io;
use std::sync::{Arc, Mutex};

use log::warn;

use crate::app::events::OutputEvent;
use crate::app::ports::OutputSink;

/// Longest rendered line, with room for a ten-digit minute count.
pub const LINE_CAP: usize = 64;

pub type Line = heapless::String<LINE_CAP>;

/// Render one event.  Never truncates for any `u32` argument.
pub fn render_line(event: OutputEvent) -> Line {
    let mut line = Line::new();
    // Every format below fits in LINE_CAP, so write! cannot fail.
    let _ = match event {
        OutputEvent::LightOn => write!(line, "Light is turned on"),
        OutputEvent::LightOff => write!(line, "Light is turned off"),
        OutputEvent::ShowPower(watts) => write!(line, "Display shows: {} W", watts),
        OutputEvent::ShowTime { minutes, seconds } => {
            write!(line, "Display shows: {:02}:{:02}", minutes, seconds)
        }
        OutputEvent::DisplayCleared => write!(line, "Display cleared"),
        OutputEvent::PowerTubeOn(watts) => write!(line, "PowerTube works with {}", watts),
        OutputEvent::PowerTubeOff => write!(line, "PowerTube turned off"),
    };
    line
}

// ── Writer-backed output ─────────────────────────────────────

/// Writes one line per event to any `io::Write` (stdout in the simulator).
pub struct TextOutput<W: io::Write> {
    writer: W,
}

impl<W: io::Write> TextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> OutputSink for TextOutput<W> {
    fn output(&mut self, event: OutputEvent) {
        let line = render_line(event);
        if let Err(e) = writeln!(self.writer, "{}", line).and_then(|()| self.writer.flush()) {
            warn!("Output write failed: {}", e);
        }
    }
}

// ── Recording output ─────────────────────────────────────────

/// Shared, cloneable recorder.  One clone goes to the oven, the other
/// stays with the observer.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    events: Arc<Mutex<Vec<OutputEvent>>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OutputEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|e| render_line(e).as_str().to_owned())
            .collect()
    }

    /// Number of recorded lines that contain `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines().iter().filter(|l| l.contains(needle)).count()
    }

    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut events) => events.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl OutputSink for RecordingOutput {
    fn output(&mut self, event: OutputEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
