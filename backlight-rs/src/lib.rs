//! # backlight: gmux brightness control
//!
//! Reads the gmux backlight attribute, decides the next brightness level and
//! writes it back, but only when the calling process holds write permission
//! on the attribute.
//!
//! ## Commands
//!
//! - **Toggle**: set the high level, or the low level if the backlight is
//!   currently exactly at the high level
//! - **Step**: move one fixed increment `up` or `down`, within bounds
//!
//! ## Quick Start
//!
//! ```rust
//! use backlight::{Backlight, BacklightConfig, Command, FileOwnership, FixedIdentity, MemoryAttribute};
//!
//! let attribute = MemoryAttribute::new("123\n", FileOwnership::new(1000, 1000, 0o644));
//! let backlight = Backlight::new(
//!     BacklightConfig::default(),
//!     attribute,
//!     FixedIdentity::new(1000, 1000),
//! );
//!
//! let transition = backlight.run(&Command::Step("up".into())).unwrap();
//! assert_eq!(transition.committed, 173);
//! ```
//!
//! On a real machine, [`Backlight::native`] wires the sysfs attribute and the
//! current process identity.

pub mod backlight;
pub mod build_info;
pub mod config;
pub mod error;
pub mod host;
pub mod permission;
pub mod policy;
pub mod reader;
pub mod tracing_support;

pub use backlight::{Backlight, Command, Transition};
pub use config::{BacklightConfig, BrightnessBounds, ConfigError, DEFAULT_BRIGHTNESS_PATH};
pub use error::{BacklightError, BacklightResult};
pub use host::{AttributeFile, CallerIdentity, FixedIdentity, MemoryAttribute};
#[cfg(unix)]
pub use host::{ProcessIdentity, SysfsAttribute};
pub use permission::{can_write, FileOwnership, Identity, PermissionTriple, WriteClass};
pub use policy::{BrightnessPolicy, Direction};
pub use reader::{current_brightness, INVALID_BRIGHTNESS};

#[cfg(feature = "subscriber")]
pub use tracing_support::{init_subscriber_with_config, TracingConfig, TracingFormat};

pub use build_info::{git_commit, version_info, version_short};
