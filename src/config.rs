//! Oven configuration parameters
//!
//! All tunable parameters for the control core.  The simulator binary can
//! override them from a JSON file; anything left out keeps its default.

use serde::{Deserialize, Serialize};

/// Core oven configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvenConfig {
    // --- Power selection ---
    /// Lowest selectable power level (W); first power-button press selects it
    pub power_min_w: u32,
    /// Increment per power-button press (W)
    pub power_step_w: u32,
    /// Highest selectable power level (W); the next press wraps to the minimum
    pub power_max_w: u32,
    /// Highest wattage the power tube itself accepts (W)
    pub tube_max_w: u32,

    // --- Time selection ---
    /// Seconds added per time-button press
    pub time_step_secs: u32,

    // --- Timing ---
    /// Countdown beat (milliseconds); one tick per beat
    pub tick_interval_ms: u64,
    /// Presses closer together than this are treated as bounce (milliseconds)
    pub button_debounce_ms: u32,

    // --- Door ---
    /// Door position when the oven is constructed
    pub door_open_at_start: bool,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            // Power
            power_min_w: 50,
            power_step_w: 50,
            power_max_w: 700,
            tube_max_w: 700,

            // Time
            time_step_secs: 60,

            // Timing
            tick_interval_ms: 1000, // 1 Hz
            button_debounce_ms: 50,

            // Door
            door_open_at_start: false,
        }
    }
}

impl OvenConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Range check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.power_step_w == 0 {
            return Err(ConfigError::ValidationFailed("power_step_w must be > 0"));
        }
        if self.power_min_w == 0 {
            return Err(ConfigError::ValidationFailed("power_min_w must be > 0"));
        }
        if self.power_min_w > self.power_max_w {
            return Err(ConfigError::ValidationFailed(
                "power_min_w must not exceed power_max_w",
            ));
        }
        if (self.power_max_w - self.power_min_w) % self.power_step_w != 0 {
            return Err(ConfigError::ValidationFailed(
                "power range must be a whole number of steps",
            ));
        }
        if self.tube_max_w < self.power_max_w {
            return Err(ConfigError::ValidationFailed(
                "tube_max_w must cover power_max_w",
            ));
        }
        if self.time_step_secs == 0 {
            return Err(ConfigError::ValidationFailed("time_step_secs must be > 0"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// The selectable power range described by this config.
    pub fn power_range(&self) -> PowerRange {
        PowerRange {
            min_w: self.power_min_w,
            step_w: self.power_step_w,
            max_w: self.power_max_w,
        }
    }
}

/// Selectable power levels: `min, min+step, …, max`, cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerRange {
    pub min_w: u32,
    pub step_w: u32,
    pub max_w: u32,
}

impl PowerRange {
    /// Number of distinct selectable levels (14 for 50..=700 step 50).
    /// A zero step counts as a single level.
    pub fn levels(&self) -> u32 {
        (self.max_w.saturating_sub(self.min_w))
            .checked_div(self.step_w)
            .map_or(1, |n| n + 1)
    }

    /// Whether `watts` is one of the selectable levels.
    pub fn contains(&self, watts: u32) -> bool {
        watts >= self.min_w
            && watts <= self.max_w
            && (watts - self.min_w)
                .checked_rem(self.step_w)
                .map_or(watts == self.min_w, |r| r == 0)
    }

    /// The level selected by the next press, given the current selection.
    /// `None` (nothing selected yet) yields the minimum; the maximum wraps.
    pub fn next(&self, current: Option<u32>) -> u32 {
        match current {
            None => self.min_w,
            Some(w) if w >= self.max_w => self.min_w,
            Some(w) => w + self.step_w,
        }
    }
}

/// Errors from configuration parsing and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Malformed,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => write!(f, "config malformed"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Malformed => Self::Config("malformed"),
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
        }
    }
}
