//! Pluggable key-value backing medium.
//!
//! The original client persisted both collections in browser local
//! storage; here the medium is abstracted behind [`StorageBackend`] so the
//! store can run against a real data directory or an in-memory map in
//! tests.  The store is the sole writer of its backing medium; concurrent
//! processes sharing one directory are an accepted limitation (last write
//! wins, no merge).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::error::{Result, StoreError};

/// A named-slot string store.  Each key holds one serialized collection.
pub trait StorageBackend {
    /// Read the value under `key`.  `Ok(None)` means the slot was never
    /// written (or has been removed) — distinct from a read failure.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn store(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot for `key`.  Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileBackend
// ---------------------------------------------------------------------------

/// One JSON document per key under a data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (or create) the default application data directory:
    /// - Linux:   `~/.local/share/moments/`
    /// - macOS:   `~/Library/Application Support/com.moments.moments/`
    /// - Windows: `{FOLDERID_RoamingAppData}\moments\moments\data\`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "moments", "moments").ok_or(StoreError::NoDataDir)?;
        Self::open_at(project_dirs.data_dir())
    }

    /// Open (or create) a backend rooted at an explicit directory.
    ///
    /// Useful for tests and for embedding the store inside custom layouts.
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;

        tracing::info!(path = %dir.display(), "opening storage directory");

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryBackend
// ---------------------------------------------------------------------------

/// A `HashMap` behind a mutex.  The in-memory substitute the store
/// abstraction exists for: tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a raw payload under a key, bypassing the store.  Lets tests
    /// exercise the degrade-to-empty path with corrupt data.
    pub fn inject(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open_at(dir.path()).expect("should open");

        assert!(backend.load("slot").unwrap().is_none());

        backend.store("slot", "[1,2,3]").unwrap();
        assert_eq!(backend.load("slot").unwrap().as_deref(), Some("[1,2,3]"));

        backend.remove("slot").unwrap();
        assert!(backend.load("slot").unwrap().is_none());
    }

    #[test]
    fn file_backend_remove_absent_key_ok() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open_at(dir.path()).unwrap();
        backend.remove("never-written").unwrap();
    }

    #[test]
    fn memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        backend.store("slot", "hello").unwrap();
        assert_eq!(backend.load("slot").unwrap().as_deref(), Some("hello"));
        backend.remove("slot").unwrap();
        assert!(backend.load("slot").unwrap().is_none());
    }
}
