//! Door reed switch.
//!
//! The switch is read through an `embedded-hal` [`InputPin`]: HIGH means
//! the door is open (magnet away from the reed).  [`DoorSensor::poll`]
//! reports edges only, so holding the door open produces one `Opened`.
//!
//! On the host the pin is a [`SimPin`], an atomic level shared between
//! the sensor and whoever plays the user.

use core::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::{ErrorType, InputPin};
use log::{info, warn};

use crate::app::commands::DoorEvent;

pub struct DoorSensor<P: InputPin> {
    pin: P,
    last_open: bool,
}

impl<P: InputPin> DoorSensor<P> {
    /// Samples the pin once so the first `poll` only reports real changes.
    /// An unreadable pin is treated as open.
    pub fn new(mut pin: P) -> Self {
        let last_open = match pin.is_high() {
            Ok(open) => open,
            Err(e) => {
                warn!("Door pin read failed at init: {:?}, assuming open", e);
                true
            }
        };
        Self { pin, last_open }
    }

    pub fn is_open(&self) -> bool {
        self.last_open
    }

    /// Read the pin and report an edge, if any.
    pub fn poll(&mut self) -> Option<DoorEvent> {
        let open = match self.pin.is_high() {
            Ok(open) => open,
            Err(e) => {
                warn!("Door pin read failed: {:?}", e);
                return None;
            }
        };
        if open == self.last_open {
            return None;
        }
        self.last_open = open;
        let event = if open {
            DoorEvent::Opened
        } else {
            DoorEvent::Closed
        };
        info!("Door {:?}", event);
        Some(event)
    }
}

// ── Simulation pin ───────────────────────────────────────────

/// Host stand-in for the reed switch GPIO.  Clones share one level.
#[derive(Debug, Clone, Default)]
pub struct SimPin {
    level: Arc<AtomicBool>,
}

impl SimPin {
    pub fn new(high: bool) -> Self {
        Self {
            level: Arc::new(AtomicBool::new(high)),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.level.store(high, Ordering::Release);
    }

    pub fn level(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level())
    }
}
