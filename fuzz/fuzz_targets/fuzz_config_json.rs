//! Fuzz the JSON configuration loader.
//!
//! Any input must either be rejected or yield a config that validates.

#![no_main]

use libfuzzer_sys::fuzz_target;
use microwave::config::OvenConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = OvenConfig::from_json(text) {
        assert!(config.validate().is_ok());
        let range = config.power_range();
        assert!(range.contains(range.next(None)));
    }
});
