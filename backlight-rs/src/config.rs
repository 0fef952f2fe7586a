//! Brightness bounds and attribute location.
//!
//! Everything the policy and orchestrator need to know about the device is
//! carried in a [`BacklightConfig`] value, so the same logic can be exercised
//! against alternative bounds in tests.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Kernel attribute exposing the gmux backlight level.
pub const DEFAULT_BRIGHTNESS_PATH: &str = "/sys/class/backlight/gmux_backlight/brightness";

/// Lowest brightness considered valid.
pub const MINIMUM_BRIGHTNESS: i64 = 1;

/// Toggle target when the backlight is currently high.
pub const LOW_BRIGHTNESS: i64 = 250;

/// Toggle target for every other reading.
pub const HIGH_BRIGHTNESS: i64 = 750;

/// Highest brightness the device accepts.
pub const MAXIMUM_BRIGHTNESS: i64 = 999;

/// Increment applied by `up` / `down`.
pub const STEP_BRIGHTNESS: i64 = 50;

/// Error type for rejected configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Brightness bounds must satisfy minimum <= low < high <= maximum (got {minimum}, {low}, {high}, {maximum})")]
    InvalidBounds {
        minimum: i64,
        low: i64,
        high: i64,
        maximum: i64,
    },

    #[error("Step size must be positive (got {0})")]
    InvalidStep(i64),
}

/// Named brightness levels used for toggling and range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessBounds {
    minimum: i64,
    low: i64,
    high: i64,
    maximum: i64,
}

impl BrightnessBounds {
    /// Create bounds, checking `minimum <= low < high <= maximum`.
    pub fn new(minimum: i64, low: i64, high: i64, maximum: i64) -> Result<Self, ConfigError> {
        if minimum <= low && low < high && high <= maximum {
            Ok(Self {
                minimum,
                low,
                high,
                maximum,
            })
        } else {
            Err(ConfigError::InvalidBounds {
                minimum,
                low,
                high,
                maximum,
            })
        }
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// True iff `reading` is at least the minimum brightness.
    pub fn is_valid(&self, reading: i64) -> bool {
        reading >= self.minimum
    }

    /// True iff `reading` is exactly the high level.
    ///
    /// This is an equality test, not a threshold: a reading one above the
    /// high level is not "high".
    pub fn is_high(&self, reading: i64) -> bool {
        reading == self.high
    }
}

impl Default for BrightnessBounds {
    fn default() -> Self {
        Self {
            minimum: MINIMUM_BRIGHTNESS,
            low: LOW_BRIGHTNESS,
            high: HIGH_BRIGHTNESS,
            maximum: MAXIMUM_BRIGHTNESS,
        }
    }
}

/// Complete configuration for one backlight device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacklightConfig {
    path: PathBuf,
    bounds: BrightnessBounds,
    step: i64,
}

impl BacklightConfig {
    /// Create a configuration for the attribute at `path` with default bounds.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bounds: BrightnessBounds::default(),
            step: STEP_BRIGHTNESS,
        }
    }

    /// Replace the brightness bounds
    pub fn with_bounds(mut self, bounds: BrightnessBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replace the step size
    pub fn with_step(mut self, step: i64) -> Result<Self, ConfigError> {
        if step <= 0 {
            return Err(ConfigError::InvalidStep(step));
        }
        self.step = step;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bounds(&self) -> BrightnessBounds {
        self.bounds
    }

    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BacklightConfig::default();
        assert_eq!(config.path(), Path::new(DEFAULT_BRIGHTNESS_PATH));
        assert_eq!(config.step(), 50);

        let bounds = config.bounds();
        assert_eq!(bounds.minimum(), 1);
        assert_eq!(bounds.low(), 250);
        assert_eq!(bounds.high(), 750);
        assert_eq!(bounds.maximum(), 999);
    }

    #[test]
    fn test_bounds_ordering_enforced() {
        assert!(BrightnessBounds::new(1, 1, 2, 2).is_ok());
        assert!(matches!(
            BrightnessBounds::new(1, 500, 500, 999),
            Err(ConfigError::InvalidBounds { .. })
        ));
        assert!(BrightnessBounds::new(10, 5, 750, 999).is_err());
        assert!(BrightnessBounds::new(1, 250, 1000, 999).is_err());
    }

    #[test]
    fn test_is_valid() {
        let bounds = BrightnessBounds::default();
        assert!(!bounds.is_valid(-1));
        assert!(!bounds.is_valid(0));
        assert!(bounds.is_valid(1));
        assert!(bounds.is_valid(5000));
    }

    #[test]
    fn test_is_high_is_exact() {
        let bounds = BrightnessBounds::default();
        assert!(bounds.is_high(750));
        assert!(!bounds.is_high(749));
        assert!(!bounds.is_high(751));
        assert!(!bounds.is_high(-1));
    }

    #[test]
    fn test_step_must_be_positive() {
        assert_eq!(
            BacklightConfig::default().with_step(0),
            Err(ConfigError::InvalidStep(0))
        );
        let config = BacklightConfig::default().with_step(10).unwrap();
        assert_eq!(config.step(), 10);
    }
}
