//! Microwave oven control library.
//!
//! Exposes the control core (state machines, ports, service), the host
//! drivers and adapters, and the threaded runtime, for the simulator
//! binary and for integration testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
pub mod runtime;
pub mod safety;
