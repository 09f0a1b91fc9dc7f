//! WeightConfigStore: the single owner of the active [`FusionConfig`].
//!
//! The active config is an `Arc<FusionConfig>` published behind a lock that
//! only ever guards the pointer itself. Loading, validation and persistence
//! run outside the lock; readers clone the `Arc` and keep a consistent
//! snapshot for as long as they hold it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use skillfuse_core::errors::{ConfigurationError, PersistenceError, SkillfuseError, SkillfuseResult};
use skillfuse_core::traits::IConfigBackingStore;
use skillfuse_core::{FusionConfig, Skill, SkillWeightVector};
use skillfuse_observability::events;
use tracing::{debug, info};

use crate::file_store::FileConfigBackingStore;

/// Owns, validates, persists, and hot-reloads per-skill weight configuration.
pub struct WeightConfigStore {
    backing: Arc<dyn IConfigBackingStore>,
    path: Option<PathBuf>,
    active: RwLock<Option<Arc<FusionConfig>>>,
}

impl WeightConfigStore {
    /// Create a store over `backing`. Without a `path` the store serves the
    /// built-in defaults and never persists.
    pub fn new(backing: Arc<dyn IConfigBackingStore>, path: Option<PathBuf>) -> Self {
        Self {
            backing,
            path,
            active: RwLock::new(None),
        }
    }

    /// A store over a JSON or TOML document at `path`.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileConfigBackingStore::new()), Some(path.into()))
    }

    /// A store serving only the built-in defaults.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(FileConfigBackingStore::new()), None)
    }

    /// Location of the persisted document, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The active config, loading it on first use.
    pub fn get(&self) -> Arc<FusionConfig> {
        if let Some(current) = self.current() {
            return current;
        }

        let loaded = Arc::new(self.load());
        let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent `get` or `update` may have published first; keep theirs.
        match slot.as_ref() {
            Some(existing) => Arc::clone(existing),
            None => {
                *slot = Some(Arc::clone(&loaded));
                loaded
            }
        }
    }

    /// Weight vector for one skill from the active config.
    pub fn weights_for(&self, skill: Skill) -> Result<SkillWeightVector, ConfigurationError> {
        self.get().weights_for(skill)
    }

    /// Validate `new_config`, then atomically make it the active config.
    ///
    /// With `persist`, the document is also written to the backing store. A
    /// failed write is logged and does not revert the in-memory swap, so the
    /// running process and the document can briefly disagree until the next
    /// successful save.
    pub fn update(&self, new_config: FusionConfig, persist: bool) -> SkillfuseResult<()> {
        new_config.validate()?;

        let next = Arc::new(new_config);
        let previous = {
            let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
            slot.replace(Arc::clone(&next))
        };
        let previous_version = previous
            .as_ref()
            .map(|c| c.version.as_str())
            .unwrap_or("<unloaded>");
        events::config_updated(previous_version, &next.version);

        if persist {
            if let Some(path) = &self.path {
                if let Err(e) = self.backing.save(path, &next) {
                    events::persistence_failed(&path.display().to_string(), &e.to_string());
                }
            } else {
                debug!("no config path set; update kept in memory only");
            }
        }
        Ok(())
    }

    /// Replace one skill's weight vector, built from
    /// `[model, linguistic, behavioral, confidence_adjustment]`.
    ///
    /// Fails with `InvalidWeights` before anything is swapped.
    pub fn update_skill_weights(
        &self,
        skill: Skill,
        components: [f64; 4],
        persist: bool,
    ) -> SkillfuseResult<()> {
        let vector = SkillWeightVector::from_array(components)?;
        let next = self.get().with_weights(skill, vector);
        self.update(next, persist)
    }

    /// Drop the cached config so the next `get` re-reads the backing store.
    pub fn reload(&self) {
        let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        info!("weight configuration cache cleared");
    }

    /// Whether a config is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    fn current(&self) -> Option<Arc<FusionConfig>> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    /// Read the backing document, falling back to the built-in defaults.
    /// Fail-closed: any invalid entry rejects the whole document.
    fn load(&self) -> FusionConfig {
        let Some(path) = &self.path else {
            let config = FusionConfig::builtin_defaults();
            events::config_loaded(&config.version, "defaults", config.weights.len());
            return config;
        };

        match self.backing.load(path) {
            Ok(config) => {
                events::config_loaded(&config.version, "backing_store", config.weights.len());
                config
            }
            Err(SkillfuseError::Persistence(PersistenceError::NotFound { .. })) => {
                let config = FusionConfig::builtin_defaults();
                info!(path = %path.display(), "no weight config document; using built-in defaults");
                events::config_loaded(&config.version, "defaults", config.weights.len());
                config
            }
            Err(e) => {
                events::config_fallback(&path.display().to_string(), &e.to_string());
                FusionConfig::builtin_defaults()
            }
        }
    }
}

impl std::fmt::Debug for WeightConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightConfigStore")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
