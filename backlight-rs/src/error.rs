//! Error types for brightness commands
//!
//! Rejections (unreadable value, denied write, bad direction, out-of-range
//! target) are reported before anything is written. I/O failures on the
//! attribute file itself are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type BacklightResult<T> = Result<T, BacklightError>;

/// Errors that can abort a brightness command
#[derive(Debug, Error)]
pub enum BacklightError {
    /// Attribute exists but its content is not a valid brightness
    #[error("system does not report a current brightness level")]
    BrightnessUnreadable,

    /// The resolved write class denies access
    #[error("user account does not have permissions to update the brightness level; you may need to run with elevated privileges")]
    PermissionDenied,

    /// A literal number was given where a direction was expected
    #[error("given a number but expected a direction (up, down)")]
    NumericInputRejected,

    /// Target is above the configured maximum
    #[error("target brightness {target} is above the maximum of {maximum}")]
    TargetTooHigh { target: i64, maximum: i64 },

    /// Target is below the configured minimum
    #[error("target brightness {target} is below the minimum of {minimum}")]
    TargetTooLow { target: i64, minimum: i64 },

    /// Token is neither a direction nor a number
    #[error("unknown direction '{0}'; expected a direction (up, down)")]
    UnknownDirection(String),

    /// Reading the attribute failed
    #[error("Failed to read '{path}': {source}")]
    AttributeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Querying ownership and mode of the attribute failed
    #[error("Failed to stat '{path}': {source}")]
    AttributeStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the new value failed
    #[error("Failed to write '{path}': {source}")]
    AttributeWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BacklightError {
    /// Check if this error came from the attribute file's I/O rather than
    /// from a rejected command
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::AttributeRead { .. } | Self::AttributeStat { .. } | Self::AttributeWrite { .. }
        )
    }
}
