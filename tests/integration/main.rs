//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the oven against
//! mock or host adapters.  Everything runs on the host with no real
//! hardware.

mod mock_hw;
mod output_tests;
