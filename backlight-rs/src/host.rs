//! Host collaborators: the attribute file and the caller's identity
//!
//! The orchestrator only talks to the operating system through these two
//! traits. Native implementations wrap sysfs and libc; the in-memory ones
//! stand in for them in tests or when embedding the logic elsewhere.

#[cfg(unix)]
use std::fs::{self, OpenOptions};
use std::io;
#[cfg(unix)]
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::permission::{FileOwnership, Identity};

/// Access to the brightness attribute file
pub trait AttributeFile: Send + Sync {
    /// Raw text content of the attribute
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Owner uid/gid and permission bits of the attribute
    fn stat(&self, path: &Path) -> io::Result<FileOwnership>;

    /// Write `content` as the attribute's new value
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Source of the calling process's identity
pub trait CallerIdentity: Send + Sync {
    fn current(&self) -> Identity;
}

// ============================================================================
// Native implementations
// ============================================================================

/// Attribute file backed by the real filesystem
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsAttribute;

#[cfg(unix)]
impl AttributeFile for SysfsAttribute {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn stat(&self, path: &Path) -> io::Result<FileOwnership> {
        use std::os::unix::fs::MetadataExt;

        tracing::debug!(path = %path.display(), "Checking attribute ownership");
        let metadata = fs::metadata(path)?;
        Ok(FileOwnership::new(
            metadata.uid(),
            metadata.gid(),
            metadata.mode() & 0o777,
        ))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        // Kernel attributes take the latest integer written; never create or truncate.
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(content.as_bytes())
    }
}

/// Real uid/gid of the running process
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessIdentity;

#[cfg(unix)]
impl CallerIdentity for ProcessIdentity {
    fn current(&self) -> Identity {
        // SAFETY: getuid and getgid have no preconditions and cannot fail.
        let (uid, gid) = unsafe { (libc::getuid(), libc::getgid()) };
        Identity::new(uid, gid)
    }
}

// ============================================================================
// In-memory implementations
// ============================================================================

#[derive(Debug)]
struct MemoryState {
    contents: String,
    writes: Vec<String>,
    stat_calls: usize,
}

/// In-memory attribute that records every write
///
/// Like a kernel attribute, the stored contents become the latest value
/// written.
#[derive(Debug)]
pub struct MemoryAttribute {
    state: Mutex<MemoryState>,
    ownership: FileOwnership,
}

impl MemoryAttribute {
    /// Create an attribute holding `contents`, owned as described by `ownership`
    pub fn new(contents: impl Into<String>, ownership: FileOwnership) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                contents: contents.into(),
                writes: Vec::new(),
                stat_calls: 0,
            }),
            ownership,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned lock still holds consistent data for this simple state
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every string passed to `write`, in order
    pub fn writes(&self) -> Vec<String> {
        self.lock().writes.clone()
    }

    /// Current stored contents
    pub fn contents(&self) -> String {
        self.lock().contents.clone()
    }

    /// Number of times `stat` was called
    pub fn stat_calls(&self) -> usize {
        self.lock().stat_calls
    }
}

impl AttributeFile for MemoryAttribute {
    fn read(&self, _path: &Path) -> io::Result<String> {
        Ok(self.lock().contents.clone())
    }

    fn stat(&self, _path: &Path) -> io::Result<FileOwnership> {
        self.lock().stat_calls += 1;
        Ok(self.ownership)
    }

    fn write(&self, _path: &Path, content: &str) -> io::Result<()> {
        let mut state = self.lock();
        state.contents = content.to_string();
        state.writes.push(content.to_string());
        Ok(())
    }
}

/// Identity fixed at construction
#[derive(Debug, Clone, Copy)]
pub struct FixedIdentity(pub Identity);

impl FixedIdentity {
    pub fn new(uid: u32, gid: u32) -> Self {
        Self(Identity::new(uid, gid))
    }
}

impl CallerIdentity for FixedIdentity {
    fn current(&self) -> Identity {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_attribute_records_writes() {
        let attr = MemoryAttribute::new("123\n", FileOwnership::new(0, 0, 0o644));
        let path = Path::new("brightness");

        assert_eq!(attr.read(path).unwrap(), "123\n");
        attr.write(path, "173").unwrap();

        assert_eq!(attr.writes(), vec!["173".to_string()]);
        assert_eq!(attr.contents(), "173");
    }

    #[test]
    fn test_memory_attribute_counts_stat() {
        let ownership = FileOwnership::new(1, 2, 0o660);
        let attr = MemoryAttribute::new("", ownership);
        assert_eq!(attr.stat_calls(), 0);

        assert_eq!(attr.stat(Path::new("x")).unwrap(), ownership);
        assert_eq!(attr.stat_calls(), 1);
    }

    #[test]
    fn test_fixed_identity() {
        let id = FixedIdentity::new(501, 20);
        assert_eq!(id.current(), Identity::new(501, 20));
    }

    #[test]
    #[cfg(unix)]
    fn test_process_identity_matches_libc() {
        let id = ProcessIdentity.current();
        assert_eq!(id.uid, unsafe { libc::getuid() });
        assert_eq!(id.gid, unsafe { libc::getgid() });
    }
}
