//! ModelRegistry: one trained model per skill.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use skillfuse_core::errors::{EvidenceError, SkillfuseResult};
use skillfuse_core::traits::IPredictionModel;
use skillfuse_core::Skill;
use tracing::info;

/// Maps each skill to its prediction model. Built at startup, read-only after.
#[derive(Default, Clone)]
pub struct ModelRegistry {
    models: BTreeMap<Skill, Arc<dyn IPredictionModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` for `skill`, replacing any previous model.
    ///
    /// The model must declare a non-empty, duplicate-free feature-name list;
    /// its length is the expected feature-vector length.
    pub fn register(&mut self, skill: Skill, model: Arc<dyn IPredictionModel>) -> SkillfuseResult<()> {
        let names = model.feature_names();
        if names.is_empty() {
            return Err(EvidenceError::InvalidModel {
                skill,
                reason: "model declares no feature names".to_string(),
            }
            .into());
        }
        let mut seen = HashSet::with_capacity(names.len());
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(EvidenceError::InvalidModel {
                skill,
                reason: format!("duplicate feature name {dup:?}"),
            }
            .into());
        }

        info!(skill = %skill, features = names.len(), "prediction model registered");
        self.models.insert(skill, model);
        Ok(())
    }

    pub fn get(&self, skill: Skill) -> Option<Arc<dyn IPredictionModel>> {
        self.models.get(&skill).cloned()
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.models.contains_key(&skill)
    }

    /// Skills with a registered model, in `Skill` order.
    pub fn skills(&self) -> impl Iterator<Item = Skill> + '_ {
        self.models.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("skills", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}
