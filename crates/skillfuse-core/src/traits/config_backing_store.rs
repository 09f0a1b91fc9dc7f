use std::path::Path;

use crate::errors::SkillfuseResult;
use crate::models::FusionConfig;

/// Durable home of the weight configuration.
pub trait IConfigBackingStore: Send + Sync {
    /// Load and validate a config. Absent documents yield `PersistenceError::NotFound`.
    fn load(&self, path: &Path) -> SkillfuseResult<FusionConfig>;

    fn save(&self, path: &Path, config: &FusionConfig) -> SkillfuseResult<()>;
}
