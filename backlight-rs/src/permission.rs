//! Write-permission resolution for the brightness attribute
//!
//! Access is decided by picking exactly one permission class for the
//! caller and reading that class's write bit:
//!
//! | Caller matches | Class used |
//! |----------------|------------|
//! | file uid       | owner      |
//! | file gid       | group      |
//! | neither        | other      |
//!
//! The first match wins and a denying class never falls through to the next
//! one. There is no superuser bypass and supplementary groups are not
//! consulted.

use std::fmt;

const OWNER_WRITE: u32 = 0o200;
const GROUP_WRITE: u32 = 0o020;
const OTHER_WRITE: u32 = 0o002;

/// A uid/gid pair, for either the calling process or a file's owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
}

impl Identity {
    pub fn new(uid: u32, gid: u32) -> Self {
        Self { uid, gid }
    }
}

/// Write bits of a POSIX mode, one per permission class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionTriple {
    pub owner_write: bool,
    pub group_write: bool,
    pub other_write: bool,
}

impl PermissionTriple {
    /// Extract the write bits from the permission part of a mode
    pub fn from_mode(mode: u32) -> Self {
        Self {
            owner_write: mode & OWNER_WRITE != 0,
            group_write: mode & GROUP_WRITE != 0,
            other_write: mode & OTHER_WRITE != 0,
        }
    }

    /// Write bit of the given class
    pub fn allows(&self, class: WriteClass) -> bool {
        match class {
            WriteClass::Owner => self.owner_write,
            WriteClass::Group => self.group_write,
            WriteClass::Other => self.other_write,
        }
    }
}

/// Permission class that governs the caller's access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteClass {
    Owner,
    Group,
    Other,
}

impl fmt::Display for WriteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteClass::Owner => write!(f, "owner"),
            WriteClass::Group => write!(f, "group"),
            WriteClass::Other => write!(f, "other"),
        }
    }
}

/// Ownership and mode of the attribute, as reported by stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOwnership {
    pub owner: Identity,
    /// Permission bits; anything above the low nine bits is ignored
    pub mode: u32,
}

impl FileOwnership {
    pub fn new(uid: u32, gid: u32, mode: u32) -> Self {
        Self {
            owner: Identity::new(uid, gid),
            mode,
        }
    }

    pub fn permissions(&self) -> PermissionTriple {
        PermissionTriple::from_mode(self.mode)
    }
}

/// Select the class whose write bit applies to `caller`
pub fn resolve_write_class(caller: Identity, owner: Identity) -> WriteClass {
    if caller.uid == owner.uid {
        WriteClass::Owner
    } else if caller.gid == owner.gid {
        WriteClass::Group
    } else {
        WriteClass::Other
    }
}

/// Decide whether `caller` may write a file owned by `owner` with `perms`
pub fn can_write(caller: Identity, owner: Identity, perms: PermissionTriple) -> bool {
    let class = resolve_write_class(caller, owner);
    let allowed = perms.allows(class);

    tracing::debug!(
        caller_uid = caller.uid,
        caller_gid = caller.gid,
        file_uid = owner.uid,
        file_gid = owner.gid,
        %class,
        allowed,
        "Resolved write permission"
    );

    allowed
}

/// Convenience wrapper over [`can_write`] for a stat result
pub fn can_write_file(caller: Identity, file: &FileOwnership) -> bool {
    tracing::debug!(mode = %format!("{:03o}", file.mode & 0o777), "File mode");
    can_write(caller, file.owner, file.permissions())
}
