//! One-shot brightness command execution
//!
//! ```text
//! read ──► decide (toggle | step) ──► validate ──► authorize ──► commit
//!   │                                    │             │
//!   └─ BrightnessUnreadable              └─ rejected   └─ PermissionDenied
//! ```
//!
//! Every rejection happens before the attribute is written. There are no
//! retries: an I/O failure at any stage ends the command.

use std::fmt;
use std::sync::Arc;

use crate::config::BacklightConfig;
use crate::error::{BacklightError, BacklightResult};
use crate::host::{AttributeFile, CallerIdentity};
use crate::permission::{can_write_file, FileOwnership};
use crate::policy::{BrightnessPolicy, Direction};
use crate::reader::{current_brightness, INVALID_BRIGHTNESS};

/// Command requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Flip between the high and low levels
    Toggle,
    /// Step in the direction named by the raw token
    Step(String),
}

impl Command {
    /// Build a command from an optional direction argument
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Command::Toggle,
            Some(token) => Command::Step(token.to_string()),
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            Command::Toggle => None,
            Command::Step(token) => Some(token.as_str()),
        }
    }
}

/// Brightness before and after a committed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: i64,
    pub committed: i64,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Brightness set to {} (was {})",
            self.committed, self.previous
        )
    }
}

/// Brightness controller for a single attribute file
pub struct Backlight {
    config: BacklightConfig,
    policy: BrightnessPolicy,
    attribute: Arc<dyn AttributeFile>,
    identity: Arc<dyn CallerIdentity>,
}

impl fmt::Debug for Backlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backlight")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Backlight {
    /// Create a controller with the given collaborators
    pub fn new(
        config: BacklightConfig,
        attribute: impl AttributeFile + 'static,
        identity: impl CallerIdentity + 'static,
    ) -> Self {
        Self::with_shared(config, Arc::new(attribute), Arc::new(identity))
    }

    /// Create a controller from already shared collaborators
    pub fn with_shared(
        config: BacklightConfig,
        attribute: Arc<dyn AttributeFile>,
        identity: Arc<dyn CallerIdentity>,
    ) -> Self {
        Self {
            policy: BrightnessPolicy::from_config(&config),
            config,
            attribute,
            identity,
        }
    }

    /// Controller for the real gmux attribute, acting as the current process
    #[cfg(unix)]
    pub fn native() -> Self {
        use crate::host::{ProcessIdentity, SysfsAttribute};

        Self::new(BacklightConfig::default(), SysfsAttribute, ProcessIdentity)
    }

    pub fn config(&self) -> &BacklightConfig {
        &self.config
    }

    /// Current brightness, or [`INVALID_BRIGHTNESS`] if the attribute's
    /// content does not parse
    pub fn current(&self) -> BacklightResult<i64> {
        let path = self.config.path();
        let raw = self
            .attribute
            .read(path)
            .map_err(|source| BacklightError::AttributeRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(current_brightness(&raw))
    }

    /// Whether the calling process may write the attribute
    pub fn can_write(&self) -> BacklightResult<bool> {
        let caller = self.identity.current();
        tracing::debug!(uid = caller.uid, gid = caller.gid, "Running as");

        let ownership = self.ownership()?;
        tracing::debug!(
            uid = ownership.owner.uid,
            gid = ownership.owner.gid,
            "File ownership"
        );

        Ok(can_write_file(caller, &ownership))
    }

    /// Compute the target for `command` without writing anything
    pub fn plan(&self, command: &Command) -> BacklightResult<Transition> {
        let current = self.current()?;
        if !self.policy.bounds().is_valid(current) {
            return Err(BacklightError::BrightnessUnreadable);
        }

        let target = match command {
            Command::Toggle => self.policy.toggle(current),
            Command::Step(token) => match token.parse::<Direction>() {
                Ok(direction) => {
                    tracing::debug!(%direction, current, "Stepping brightness");
                    self.policy.step_by(current, direction)
                }
                Err(err @ BacklightError::UnknownDirection(_)) => return Err(err),
                Err(_) => INVALID_BRIGHTNESS,
            },
        };
        self.policy.validate_target(target, command.token())?;

        Ok(Transition {
            previous: current,
            committed: target,
        })
    }

    /// Execute `command`: read, decide, authorize, then write
    pub fn run(&self, command: &Command) -> BacklightResult<Transition> {
        let transition = self.plan(command)?;

        if !self.can_write()? {
            return Err(BacklightError::PermissionDenied);
        }

        self.commit(transition.committed)?;
        tracing::info!(
            previous = transition.previous,
            committed = transition.committed,
            "Brightness updated"
        );
        Ok(transition)
    }

    fn ownership(&self) -> BacklightResult<FileOwnership> {
        let path = self.config.path();
        self.attribute
            .stat(path)
            .map_err(|source| BacklightError::AttributeStat {
                path: path.to_path_buf(),
                source,
            })
    }

    fn commit(&self, target: i64) -> BacklightResult<i64> {
        let path = self.config.path();
        tracing::debug!(brightness = target, path = %path.display(), "Setting brightness");

        self.attribute
            .write(path, &target.to_string())
            .map_err(|source| BacklightError::AttributeWrite {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(target)
    }
}
