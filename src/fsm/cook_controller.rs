//! Cook controller: the Idle/Cooking state machine.
//!
//! ```text
//!   IDLE ──[start_cooking(w, s)]──▶ COOKING ──[tick]──▶ COOKING (display mm:ss)
//!     ▲                                │
//!     ├──────────[stop()]──────────────┤  timer stop, tube off
//!     └──────────[expired]─────────────┘  tube off, notice Done
//! ```
//!
//! Timer events are matched against the session's [`TimerEpoch`]; anything
//! from an older countdown, or arriving after a stop, is dropped.  That is
//! what makes `stop()` final even if a tick was already in flight.

use log::{debug, info, warn};

use crate::app::commands::TimerEvent;
use crate::app::ports::{DisplayPort, PowerTubePort, TimerPort};
use crate::config::PowerRange;
use crate::error::{Error, Result};

use super::Handled;
use super::context::CookSession;

/// What the controller reports back after a timer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookerNotice {
    /// The session ran to completion; the UI should wind down.
    Done,
}

/// Outcome of [`CookController::on_timer_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Event matched the live session (tick applied, or `Done`).
    Applied(Option<CookerNotice>),
    /// Stale or duplicate event, no side effects.
    Stale,
}

impl TimerOutcome {
    pub fn handled(self) -> Handled {
        match self {
            Self::Applied(_) => Handled::Applied,
            Self::Stale => Handled::Ignored,
        }
    }
}

pub struct CookController {
    range: PowerRange,
    session: Option<CookSession>,
}

impl CookController {
    pub fn new(range: PowerRange) -> Self {
        Self {
            range,
            session: None,
        }
    }

    pub fn is_cooking(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&CookSession> {
        self.session.as_ref()
    }

    /// Idle → Cooking.  Turns the tube on, then starts the countdown.
    ///
    /// Parameters are validated before any device is touched, so a
    /// rejected start leaves everything as it was.  If the timer refuses
    /// to start, the tube is switched back off before returning.
    pub fn start_cooking(
        &mut self,
        wattage: u32,
        duration_secs: u32,
        hw: &mut (impl PowerTubePort + TimerPort),
    ) -> Result<()> {
        if self.session.is_some() {
            return Err(Error::InvalidState("cook session already running"));
        }
        if !self.range.contains(wattage) {
            return Err(Error::InvalidArgument("wattage outside power range"));
        }
        if duration_secs == 0 {
            return Err(Error::InvalidArgument("cook duration must be > 0"));
        }

        hw.turn_on_tube(wattage)?;
        let epoch = match hw.start_timer(duration_secs) {
            Ok(epoch) => epoch,
            Err(e) => {
                hw.turn_off_tube();
                return Err(e.into());
            }
        };

        self.session = Some(CookSession {
            wattage,
            duration_secs,
            remaining_secs: duration_secs,
            epoch,
        });
        info!("Cooking started: {} W for {} s ({:?})", wattage, duration_secs, epoch);
        Ok(())
    }

    /// Cooking → Idle by cancellation.  Stops the timer, then the tube.
    /// Returns `false` (and does nothing) if already idle.
    pub fn stop(&mut self, hw: &mut (impl PowerTubePort + TimerPort)) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        hw.stop_timer();
        hw.turn_off_tube();
        info!(
            "Cooking stopped with {} s remaining ({:?})",
            session.remaining_secs, session.epoch
        );
        true
    }

    /// Forced Idle after a device failure.  Same as [`stop`](Self::stop),
    /// plus a tube shutdown even when no session is recorded.
    pub fn abort(&mut self, hw: &mut (impl PowerTubePort + TimerPort)) -> bool {
        let was_cooking = self.stop(hw);
        if hw.is_tube_on() {
            warn!("Tube still energised after abort, forcing off");
            hw.turn_off_tube();
        }
        was_cooking
    }

    /// Apply a countdown event.
    pub fn on_timer_event(
        &mut self,
        event: TimerEvent,
        hw: &mut (impl PowerTubePort + DisplayPort),
    ) -> TimerOutcome {
        match event {
            TimerEvent::Tick {
                epoch,
                remaining_secs,
            } => {
                let Some(session) = self.session.as_mut().filter(|s| s.epoch == epoch) else {
                    debug!("Stale tick from {:?} dropped", epoch);
                    return TimerOutcome::Stale;
                };
                session.remaining_secs = remaining_secs;
                let (minutes, seconds) = session.remaining_mm_ss();
                hw.show_time(minutes, seconds);
                TimerOutcome::Applied(None)
            }
            TimerEvent::Expired { epoch } => {
                if self.session.is_none_or(|s| s.epoch != epoch) {
                    debug!("Stale expiry from {:?} dropped", epoch);
                    return TimerOutcome::Stale;
                }
                self.session = None;
                hw.turn_off_tube();
                info!("Cooking finished ({:?})", epoch);
                TimerOutcome::Applied(Some(CookerNotice::Done))
            }
        }
    }
}
