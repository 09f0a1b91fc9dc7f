use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use skillfuse_core::errors::{EvidenceError, SkillfuseResult};
use skillfuse_core::traits::{IEnsembleModel, IPredictionModel};
use skillfuse_core::Skill;

/// A model returning fixed outputs, with optional importances and members.
pub struct ScriptedModel {
    names: Vec<String>,
    prediction: f64,
    importances: Option<HashMap<String, f64>>,
    members: Option<Vec<f64>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new(names: &[&str], prediction: f64) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            prediction,
            importances: None,
            members: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_importances(mut self, importances: &[(&str, f64)]) -> Self {
        self.importances = Some(
            importances
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        );
        self
    }

    pub fn with_members(mut self, members: &[f64]) -> Self {
        self.members = Some(members.to_vec());
        self
    }

    /// Number of `predict` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IPredictionModel for ScriptedModel {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict(&self, features: &[f64]) -> SkillfuseResult<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if features.len() != self.names.len() {
            return Err(EvidenceError::FeatureLengthMismatch {
                expected: self.names.len(),
                actual: features.len(),
            }
            .into());
        }
        Ok(self.prediction)
    }

    fn feature_importances(&self) -> Option<HashMap<String, f64>> {
        self.importances.clone()
    }

    fn as_ensemble(&self) -> Option<&dyn IEnsembleModel> {
        self.members.as_ref().map(|_| self as &dyn IEnsembleModel)
    }
}

impl IEnsembleModel for ScriptedModel {
    fn member_predictions(&self, _features: &[f64]) -> SkillfuseResult<Vec<f64>> {
        Ok(self.members.clone().unwrap_or_default())
    }
}

/// A model whose predictions always fail.
pub struct FailingModel {
    skill: Skill,
    names: Vec<String>,
}

impl FailingModel {
    pub fn new(skill: Skill, names: &[&str]) -> Self {
        Self {
            skill,
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl IPredictionModel for FailingModel {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict(&self, _features: &[f64]) -> SkillfuseResult<f64> {
        Err(EvidenceError::ModelInvocation {
            skill: self.skill,
            reason: "model runtime crashed".to_string(),
        }
        .into())
    }
}
