//! Countdown timer on a dedicated thread.
//!
//! Each `start_timer` spawns one short-lived thread that runs the
//! countdown as an async task on an `edge-executor`, sleeping on
//! `async-io-mini` timers.  Every elapsed interval pushes a
//! [`TimerEvent::Tick`] into the control queue; reaching zero pushes one
//! [`TimerEvent::Expired`].
//!
//! ```text
//!  start(3) ──▶ [wait] Tick(2) [wait] Tick(1) [wait] Tick(0) Expired
//! ```
//!
//! Ticks use `try_send` and are dropped (with a warning) if the queue is
//! full.  Expiry is retried until it is accepted or the countdown is
//! cancelled.  `stop_timer` only raises the cancel flag and never waits
//! for the thread; anything it still manages to send carries an old
//! epoch and is discarded by the controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info, warn};

use crate::app::commands::{OvenInput, TimerEvent};
use crate::app::ports::{TimerEpoch, TimerPort};
use crate::error::DeviceError;
use crate::events::{ControlMsg, InputQueue};

/// Retry interval while the queue refuses an expiry.
const EXPIRY_RETRY: Duration = Duration::from_millis(5);

struct Countdown {
    epoch: TimerEpoch,
    cancel: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

pub struct ThreadTimer {
    queue: Arc<InputQueue>,
    tick: Duration,
    next_epoch: u64,
    active: Option<Countdown>,
}

impl ThreadTimer {
    pub fn new(queue: Arc<InputQueue>, tick: Duration) -> Self {
        Self {
            queue,
            tick,
            next_epoch: 1,
            active: None,
        }
    }

    /// Epoch of the most recent countdown, running or not.
    pub fn last_epoch(&self) -> Option<TimerEpoch> {
        self.active.as_ref().map(|c| c.epoch)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }
}

impl TimerPort for ThreadTimer {
    fn start_timer(&mut self, duration_secs: u32) -> Result<TimerEpoch, DeviceError> {
        if self.is_timer_running() {
            return Err(DeviceError::TimerBusy);
        }
        if duration_secs == 0 {
            return Err(DeviceError::ZeroDuration);
        }

        let epoch = TimerEpoch(self.next_epoch);
        let cancel = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));

        let job = CountdownJob {
            queue: self.queue.clone(),
            epoch,
            duration_secs,
            tick: self.tick,
            cancel: cancel.clone(),
            finished: finished.clone(),
        };
        std::thread::Builder::new()
            .name("oven-timer".into())
            .spawn(move || job.run())
            .map_err(|_| DeviceError::Fault("timer thread spawn failed"))?;

        self.next_epoch += 1;
        self.active = Some(Countdown {
            epoch,
            cancel,
            finished,
        });
        info!("Timer started: {} s ({:?})", duration_secs, epoch);
        Ok(epoch)
    }

    fn stop_timer(&mut self) {
        let Some(countdown) = self.active.as_ref() else {
            return;
        };
        if countdown.finished.load(Ordering::Acquire) {
            return;
        }
        countdown.cancel.store(true, Ordering::Release);
        countdown.finished.store(true, Ordering::Release);
        info!("Timer stopped ({:?})", countdown.epoch);
    }

    fn is_timer_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|c| !c.finished.load(Ordering::Acquire))
    }
}

impl Drop for ThreadTimer {
    fn drop(&mut self) {
        if let Some(countdown) = self.active.as_ref() {
            countdown.cancel.store(true, Ordering::Release);
        }
    }
}

// ── Countdown thread ─────────────────────────────────────────

struct CountdownJob {
    queue: Arc<InputQueue>,
    epoch: TimerEpoch,
    duration_secs: u32,
    tick: Duration,
    cancel: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

impl CountdownJob {
    fn run(self) {
        let executor: edge_executor::LocalExecutor<'_, 8> = edge_executor::LocalExecutor::new();
        futures_lite::future::block_on(executor.run(self.countdown()));
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }

    async fn countdown(&self) {
        for remaining_secs in (0..self.duration_secs).rev() {
            async_io_mini::Timer::after(self.tick).await;
            if self.cancelled() {
                debug!("Countdown {:?} cancelled", self.epoch);
                return;
            }
            let tick = TimerEvent::Tick {
                epoch: self.epoch,
                remaining_secs,
            };
            if self
                .queue
                .try_send(ControlMsg::Input(OvenInput::Timer(tick)))
                .is_err()
            {
                warn!("Control queue full, tick {} s dropped", remaining_secs);
            }
        }

        // The countdown is over as far as the owner is concerned, even
        // if delivering the expiry has to wait for queue space.
        self.finished.store(true, Ordering::Release);

        let expired = ControlMsg::Input(OvenInput::Timer(TimerEvent::Expired { epoch: self.epoch }));
        while self.queue.try_send(expired).is_err() {
            if self.cancelled() {
                return;
            }
            async_io_mini::Timer::after(EXPIRY_RETRY).await;
        }
        debug!("Countdown {:?} expired", self.epoch);
    }
}
