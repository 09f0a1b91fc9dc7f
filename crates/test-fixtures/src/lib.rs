//! Test fixtures for the SkillFuse workspace.
//!
//! Typed loading of the fixture documents under `data/`, plus in-memory
//! implementations of every collaborator trait for isolated tests.

mod backing;
mod builders;
mod feature_store;
mod models;

pub use backing::InMemoryConfigBackingStore;
pub use builders::{evidence, record};
pub use feature_store::{FailingFeatureStore, MemoryFeatureStore};
pub use models::{FailingModel, ScriptedModel};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture documents.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Raw text of a fixture file.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
