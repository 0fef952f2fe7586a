//! Brightness transition rules
//!
//! All decisions here are pure functions of their arguments and the
//! configured bounds. Nothing in this module touches the attribute file.

use std::fmt;
use std::str::FromStr;

use crate::config::{BacklightConfig, BrightnessBounds};
use crate::error::{BacklightError, BacklightResult};
use crate::reader::INVALID_BRIGHTNESS;

/// Direction of a step adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = BacklightError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ if is_numeric_token(token) => Err(BacklightError::NumericInputRejected),
            _ => Err(BacklightError::UnknownDirection(token.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// True iff `token` is one or more ASCII decimal digits
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Decision logic for toggle and step commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessPolicy {
    bounds: BrightnessBounds,
    step: i64,
}

impl BrightnessPolicy {
    pub fn new(bounds: BrightnessBounds, step: i64) -> Self {
        Self { bounds, step }
    }

    pub fn from_config(config: &BacklightConfig) -> Self {
        Self::new(config.bounds(), config.step())
    }

    pub fn bounds(&self) -> BrightnessBounds {
        self.bounds
    }

    /// Low level if `current` is exactly high, otherwise high.
    ///
    /// An invalid reading is "not high" and therefore toggles to high.
    pub fn toggle(&self, current: i64) -> i64 {
        if self.bounds.is_high(current) {
            self.bounds.low()
        } else {
            self.bounds.high()
        }
    }

    /// Move `current` one step in `direction`. No range check is applied.
    ///
    /// Saturates at the `i64` limits, so an oversized reading still lands
    /// outside the bounds instead of wrapping around.
    pub fn step_by(&self, current: i64, direction: Direction) -> i64 {
        match direction {
            Direction::Up => current.saturating_add(self.step),
            Direction::Down => current.saturating_sub(self.step),
        }
    }

    /// Step by a raw direction token; unrecognised tokens yield
    /// [`INVALID_BRIGHTNESS`].
    pub fn step(&self, current: i64, token: &str) -> i64 {
        match token.parse::<Direction>() {
            Ok(direction) => self.step_by(current, direction),
            Err(_) => INVALID_BRIGHTNESS,
        }
    }

    /// Check a computed target before it is written.
    ///
    /// A numeric `token` is rejected before any range check, whatever the
    /// target's value. Both bounds are inclusive.
    pub fn validate_target(&self, target: i64, token: Option<&str>) -> BacklightResult<()> {
        if token.is_some_and(is_numeric_token) {
            return Err(BacklightError::NumericInputRejected);
        }

        if target > self.bounds.maximum() {
            return Err(BacklightError::TargetTooHigh {
                target,
                maximum: self.bounds.maximum(),
            });
        }

        if target < self.bounds.minimum() {
            return Err(BacklightError::TargetTooLow {
                target,
                minimum: self.bounds.minimum(),
            });
        }

        Ok(())
    }
}

impl Default for BrightnessPolicy {
    fn default() -> Self {
        Self::from_config(&BacklightConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_high_goes_low() {
        let policy = BrightnessPolicy::default();
        assert_eq!(policy.toggle(750), 250);
    }

    #[test]
    fn test_toggle_anything_else_goes_high() {
        let policy = BrightnessPolicy::default();
        for current in [-1, 0, 1, 250, 749, 751, 999, 5000] {
            assert_eq!(policy.toggle(current), 750, "toggle({})", current);
        }
    }

    #[test]
    fn test_step_directions() {
        let policy = BrightnessPolicy::default();
        assert_eq!(policy.step(123, "up"), 173);
        assert_eq!(policy.step(123, "down"), 73);
        assert_eq!(policy.step(10, "down"), -40);
    }

    #[test]
    fn test_step_saturates_at_integer_limits() {
        let policy = BrightnessPolicy::default();
        assert_eq!(policy.step(i64::MAX, "up"), i64::MAX);
        assert_eq!(policy.step(i64::MIN, "down"), i64::MIN);
        assert!(matches!(
            policy.validate_target(policy.step(i64::MAX, "up"), Some("up")),
            Err(BacklightError::TargetTooHigh {
                target: i64::MAX,
                maximum: 999
            })
        ));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn test_step_unknown_token() {
        let policy = BrightnessPolicy::default();
        for token in ["", "Up", "UP", "left", "123", "+50", " up"] {
            assert_eq!(policy.step(500, token), INVALID_BRIGHTNESS, "step({:?})", token);
        }
    }

    #[test]
    fn test_numeric_token_takes_precedence() {
        let policy = BrightnessPolicy::default();
        for target in [-1, 1, 500, 999, 5000] {
            assert!(matches!(
                policy.validate_target(target, Some("123")),
                Err(BacklightError::NumericInputRejected)
            ));
        }
    }

    #[test]
    fn test_range_checks() {
        let policy = BrightnessPolicy::default();
        assert!(matches!(
            policy.validate_target(1000, Some("up")),
            Err(BacklightError::TargetTooHigh {
                target: 1000,
                maximum: 999
            })
        ));
        assert!(matches!(
            policy.validate_target(0, Some("down")),
            Err(BacklightError::TargetTooLow {
                target: 0,
                minimum: 1
            })
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let policy = BrightnessPolicy::default();
        for token in [Some("up"), Some("down"), None] {
            assert!(policy.validate_target(999, token).is_ok());
            assert!(policy.validate_target(1, token).is_ok());
        }
    }

    #[test]
    fn test_direction_parse_errors() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
        assert!(matches!(
            "42".parse::<Direction>(),
            Err(BacklightError::NumericInputRejected)
        ));
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(BacklightError::UnknownDirection(token)) if token == "sideways"
        ));
    }

    #[test]
    fn test_is_numeric_token() {
        assert!(is_numeric_token("0"));
        assert!(is_numeric_token("123"));
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("-5"));
        assert!(!is_numeric_token("12a"));
        assert!(!is_numeric_token("١٢"));
    }

    #[test]
    fn test_alternative_bounds() {
        let bounds = BrightnessBounds::new(10, 20, 80, 100).unwrap();
        let policy = BrightnessPolicy::new(bounds, 5);

        assert_eq!(policy.toggle(80), 20);
        assert_eq!(policy.toggle(20), 80);
        assert_eq!(policy.step(50, "up"), 55);
        assert!(policy.validate_target(100, Some("up")).is_ok());
        assert!(policy.validate_target(101, Some("up")).is_err());
        assert!(policy.validate_target(9, Some("down")).is_err());
    }
}
