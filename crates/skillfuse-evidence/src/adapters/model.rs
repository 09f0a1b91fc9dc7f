use std::sync::Arc;

use skillfuse_core::constants::{FEATURE_CONFIDENCE_DAMPING, TOP_FEATURE_COUNT};
use skillfuse_core::errors::{EvidenceError, SkillfuseResult};
use skillfuse_core::models::clamp_unit;
use skillfuse_core::traits::{IEvidenceSource, IFeatureStore, IPredictionModel};
use skillfuse_core::{EvidenceItem, EvidenceKind, EvidenceSource, Skill, SubjectId};
use tracing::debug;

use super::{degrade_on_error, feature_store_err};
use crate::confidence::ConfidenceEstimator;
use crate::feature_vector::FeatureVector;
use crate::registry::ModelRegistry;

/// Evidence from the skill's trained model.
///
/// Emits one Contextual item for the prediction itself and up to three items
/// for the model's most important features. None carry a weight; the caller
/// back-fills `modelWeight` from the config snapshot it fuses under.
pub struct ModelPredictionAdapter {
    registry: Arc<ModelRegistry>,
    store: Arc<dyn IFeatureStore>,
    estimator: ConfidenceEstimator,
}

impl ModelPredictionAdapter {
    pub fn new(registry: Arc<ModelRegistry>, store: Arc<dyn IFeatureStore>) -> Self {
        Self {
            registry,
            store,
            estimator: ConfidenceEstimator::new(),
        }
    }

    pub fn try_collect(&self, subject: &SubjectId, skill: Skill) -> SkillfuseResult<Vec<EvidenceItem>> {
        let Some(model) = self.registry.get(skill) else {
            debug!(skill = %skill, "no model registered");
            return Ok(Vec::new());
        };

        let linguistic = self
            .store
            .latest_linguistic_features(subject)
            .map_err(feature_store_err)?;
        let behavioral = self
            .store
            .latest_behavioral_features(subject)
            .map_err(feature_store_err)?;
        if linguistic.is_none() && behavioral.is_none() {
            debug!(subject = %subject, skill = %skill, "no feature records; model not invoked");
            return Ok(Vec::new());
        }

        let features = FeatureVector::assemble(
            skill,
            model.feature_names(),
            linguistic.as_ref(),
            behavioral.as_ref(),
        );
        let raw = model
            .predict(features.values())
            .map_err(|e| EvidenceError::ModelInvocation {
                skill,
                reason: e.to_string(),
            })?;
        if !raw.is_finite() {
            return Err(EvidenceError::ModelInvocation {
                skill,
                reason: format!("non-finite prediction {raw}"),
            }
            .into());
        }

        let confidence =
            self.estimator
                .estimate(model.as_ref(), features.values(), raw, model.feature_names().len());
        let score = clamp_unit(raw);

        let prediction = EvidenceItem::new(
            EvidenceSource::ModelPrediction,
            EvidenceKind::Contextual,
            format!("Model prediction for {skill}: {score:.2}"),
            score,
            confidence,
            1.0,
        );

        let mut items = vec![prediction];
        items.extend(top_feature_items(model.as_ref(), &features, skill, score, confidence));
        debug!(subject = %subject, skill = %skill, score, confidence, items = items.len(), "model evidence collected");
        Ok(items)
    }
}

/// Items for the highest-importance features, ties broken by name.
fn top_feature_items(
    model: &dyn IPredictionModel,
    features: &FeatureVector,
    skill: Skill,
    score: f64,
    confidence: f64,
) -> Vec<EvidenceItem> {
    let Some(importances) = model.feature_importances() else {
        return Vec::new();
    };

    let mut ranked: Vec<(String, f64)> = importances
        .into_iter()
        .filter(|(_, importance)| importance.is_finite())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .take(TOP_FEATURE_COUNT)
        .map(|(name, importance)| {
            EvidenceItem::new(
                EvidenceSource::ModelPrediction,
                features.origin_of(&name).evidence_kind(),
                format!("Feature '{name}' weighs on the {skill} prediction"),
                score,
                confidence * FEATURE_CONFIDENCE_DAMPING,
                importance,
            )
        })
        .collect()
}

impl IEvidenceSource for ModelPredictionAdapter {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::ModelPrediction
    }

    fn collect(&self, subject: &SubjectId, skill: Skill) -> Vec<EvidenceItem> {
        degrade_on_error(self.source(), subject, skill, self.try_collect(subject, skill))
    }
}
