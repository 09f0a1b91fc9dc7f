//! ConfidenceEstimator: multi-component confidence for a raw model output.
//!
//! Components, each in [0.5, 1.0] except ensemble agreement:
//! - ensemble agreement `1 / (1 + k·var)` over member predictions
//! - extremity: 0.5 at a prediction of 0 or 1, rising linearly to 1.0 once
//!   the prediction is at least 0.2 from both edges
//! - completeness: share of non-zero feature-vector entries
//!
//! The weighted average over available components is clamped to
//! [`MIN_MODEL_CONFIDENCE`, `MAX_MODEL_CONFIDENCE`].

use skillfuse_core::constants::{
    COMPLETENESS_WEIGHT_SOLO, COMPLETENESS_WEIGHT_WITH_ENSEMBLE, ENSEMBLE_COMPONENT_WEIGHT,
    EXTREMITY_SATURATION_DISTANCE, EXTREMITY_WEIGHT_SOLO, EXTREMITY_WEIGHT_WITH_ENSEMBLE,
    FALLBACK_CONFIDENCE_MAX, FALLBACK_CONFIDENCE_MIN, MAX_MODEL_CONFIDENCE, MIN_MODEL_CONFIDENCE,
    VARIANCE_SENSITIVITY,
};
use skillfuse_core::errors::{EvidenceError, SkillfuseResult};
use skillfuse_core::traits::IPredictionModel;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceEstimator;

impl ConfidenceEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate confidence for `prediction`. Never fails: any error yields
    /// the fallback `clamp(prediction, 0.5, 0.85)`.
    pub fn estimate(
        &self,
        model: &dyn IPredictionModel,
        features: &[f64],
        prediction: f64,
        expected_len: usize,
    ) -> f64 {
        match self.try_estimate(model, features, prediction, expected_len) {
            Ok(confidence) => confidence,
            Err(e) => {
                let fallback = fallback_confidence(prediction);
                debug!(error = %e, fallback, "confidence estimation fell back");
                fallback
            }
        }
    }

    /// The estimate, surfacing any failure.
    pub fn try_estimate(
        &self,
        model: &dyn IPredictionModel,
        features: &[f64],
        prediction: f64,
        expected_len: usize,
    ) -> SkillfuseResult<f64> {
        if !prediction.is_finite() {
            return Err(EvidenceError::InvalidOutput {
                reason: format!("non-finite prediction {prediction}"),
            }
            .into());
        }
        if features.len() != expected_len {
            return Err(EvidenceError::FeatureLengthMismatch {
                expected: expected_len,
                actual: features.len(),
            }
            .into());
        }

        let ensemble = match model.as_ensemble() {
            Some(ensemble) => ensemble_agreement(&ensemble.member_predictions(features)?)?,
            None => None,
        };
        let extremity = extremity(prediction);
        let completeness = completeness(features, expected_len);

        let (extremity_weight, completeness_weight) = if ensemble.is_some() {
            (EXTREMITY_WEIGHT_WITH_ENSEMBLE, COMPLETENESS_WEIGHT_WITH_ENSEMBLE)
        } else {
            (EXTREMITY_WEIGHT_SOLO, COMPLETENESS_WEIGHT_SOLO)
        };

        let components = [
            ensemble.map(|c| (c, ENSEMBLE_COMPONENT_WEIGHT)),
            Some((extremity, extremity_weight)),
            completeness.map(|c| (c, completeness_weight)),
        ];
        let (weighted, total) = components
            .into_iter()
            .flatten()
            .fold((0.0, 0.0), |(sum, total), (value, weight)| {
                (sum + value * weight, total + weight)
            });

        Ok((weighted / total).clamp(MIN_MODEL_CONFIDENCE, MAX_MODEL_CONFIDENCE))
    }
}

/// Confidence used when estimation fails.
pub fn fallback_confidence(prediction: f64) -> f64 {
    if prediction.is_finite() {
        prediction.clamp(FALLBACK_CONFIDENCE_MIN, FALLBACK_CONFIDENCE_MAX)
    } else {
        FALLBACK_CONFIDENCE_MIN
    }
}

/// `1 / (1 + k·var)` over member outputs; `None` without members.
fn ensemble_agreement(members: &[f64]) -> SkillfuseResult<Option<f64>> {
    if members.is_empty() {
        return Ok(None);
    }
    if members.iter().any(|m| !m.is_finite()) {
        return Err(EvidenceError::InvalidOutput {
            reason: "non-finite ensemble member prediction".to_string(),
        }
        .into());
    }
    let n = members.len() as f64;
    let mean = members.iter().sum::<f64>() / n;
    let variance = members.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n;
    Ok(Some(1.0 / (1.0 + VARIANCE_SENSITIVITY * variance)))
}

/// `0.5 + 0.5·min(d / 0.2, 1)` with `d` the distance to the nearer of 0 and 1.
fn extremity(prediction: f64) -> f64 {
    let p = prediction.clamp(0.0, 1.0);
    let distance = p.min(1.0 - p);
    0.5 + 0.5 * (distance / EXTREMITY_SATURATION_DISTANCE).min(1.0)
}

/// `0.5 + 0.5·(non-zero / expected)`; `None` for an empty vector.
fn completeness(features: &[f64], expected_len: usize) -> Option<f64> {
    if features.is_empty() || expected_len == 0 {
        return None;
    }
    let non_zero = features.iter().filter(|v| **v != 0.0).count();
    Some(0.5 + 0.5 * (non_zero as f64 / expected_len as f64))
}
