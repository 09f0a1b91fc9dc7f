use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use skillfuse_core::errors::{PersistenceError, SkillfuseResult};
use skillfuse_core::traits::IConfigBackingStore;
use skillfuse_core::FusionConfig;

/// Config documents kept in memory, with switchable save failures.
#[derive(Default)]
pub struct InMemoryConfigBackingStore {
    documents: Mutex<HashMap<PathBuf, FusionConfig>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
    loads: AtomicUsize,
}

impl InMemoryConfigBackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or overwrite) the document at `path`, bypassing save accounting.
    pub fn put(&self, path: impl Into<PathBuf>, config: FusionConfig) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), config);
    }

    pub fn document(&self, path: &Path) -> Option<FusionConfig> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl IConfigBackingStore for InMemoryConfigBackingStore {
    fn load(&self, path: &Path) -> SkillfuseResult<FusionConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let config = self.document(path).ok_or_else(|| PersistenceError::NotFound {
            path: path.display().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, path: &Path, config: &FusionConfig) -> SkillfuseResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::Io {
                path: path.display().to_string(),
                reason: "read-only file system".to_string(),
            }
            .into());
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.put(path, config.clone());
        Ok(())
    }
}
