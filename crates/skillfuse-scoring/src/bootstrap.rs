//! Build a ready-to-use service from an [`EngineConfig`].

use std::path::Path;
use std::sync::Arc;

use skillfuse_config::WeightConfigStore;
use skillfuse_core::errors::SkillfuseResult;
use skillfuse_core::EngineConfig;
use skillfuse_evidence::ModelRegistry;
use skillfuse_observability::init_tracing_with_default;
use skillfuse_storage::SqliteFeatureStore;
use tracing::info;

use crate::service::SkillScoringService;

/// Initialize logging, open the feature database and the weight store, and
/// wire the standard adapters around `registry`.
///
/// `SKILLFUSE_LOG` overrides `config.log_level`. Tracing initialization is a
/// no-op if a subscriber is already installed.
pub fn build_service(config: &EngineConfig, registry: ModelRegistry) -> SkillfuseResult<SkillScoringService> {
    init_tracing_with_default(&config.log_level);

    let store = SqliteFeatureStore::open(Path::new(&config.feature_db_path), config.busy_timeout_ms)?;
    let weights = match &config.weight_config_path {
        Some(path) => WeightConfigStore::with_file(path),
        None => WeightConfigStore::in_memory(),
    };

    info!(
        feature_db = %config.feature_db_path,
        weight_config = ?config.weight_config_path,
        models = registry.len(),
        "scoring service ready"
    );

    Ok(SkillScoringService::from_parts(Arc::new(weights), Arc::new(registry), Arc::new(store))
        .with_persist_updates(config.persist_updates))
}
