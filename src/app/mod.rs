//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules of the oven: input handling,
//! cook orchestration and safety supervision.  All interaction with
//! devices happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
