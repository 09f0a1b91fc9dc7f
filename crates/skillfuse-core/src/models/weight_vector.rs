use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigurationError;
use crate::models::EvidenceSource;

/// Per-skill contribution of each evidence source.
///
/// Invariants: every component is in [0.0, 1.0] and the components sum to
/// 1.0 ± [`WEIGHT_SUM_TOLERANCE`]. The only way to obtain a value is
/// [`SkillWeightVector::new`] (deserialization goes through it too), so a
/// `SkillWeightVector` in hand is always valid. Vectors are replaced
/// wholesale; there are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightDocument", into = "WeightDocument")]
pub struct SkillWeightVector {
    model: f64,
    linguistic: f64,
    behavioral: f64,
    confidence_adjustment: f64,
}

impl SkillWeightVector {
    /// Validate and build a weight vector.
    pub fn new(
        model: f64,
        linguistic: f64,
        behavioral: f64,
        confidence_adjustment: f64,
    ) -> Result<Self, ConfigurationError> {
        let candidate = Self {
            model,
            linguistic,
            behavioral,
            confidence_adjustment,
        };
        candidate.validate()?;
        Ok(candidate)
    }

    /// Build from `[model, linguistic, behavioral, confidence_adjustment]`.
    pub fn from_array(components: [f64; 4]) -> Result<Self, ConfigurationError> {
        let [m, l, b, c] = components;
        Self::new(m, l, b, c)
    }

    /// Re-check the invariants.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let named = [
            ("modelWeight", self.model),
            ("linguisticWeight", self.linguistic),
            ("behavioralWeight", self.behavioral),
            ("confidenceAdjustmentWeight", self.confidence_adjustment),
        ];
        for (name, value) in named {
            // NaN fails `contains`.
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::InvalidWeights {
                    reason: format!("{name} must be in [0.0, 1.0], got {value}"),
                });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigurationError::InvalidWeights {
                reason: format!(
                    "weights must sum to 1.0 ± {WEIGHT_SUM_TOLERANCE}, got {sum:.4}"
                ),
            });
        }
        Ok(())
    }

    pub fn model(&self) -> f64 {
        self.model
    }

    pub fn linguistic(&self) -> f64 {
        self.linguistic
    }

    pub fn behavioral(&self) -> f64 {
        self.behavioral
    }

    pub fn confidence_adjustment(&self) -> f64 {
        self.confidence_adjustment
    }

    pub fn sum(&self) -> f64 {
        self.model + self.linguistic + self.behavioral + self.confidence_adjustment
    }

    /// The component that weights evidence from `source`.
    pub fn for_source(&self, source: EvidenceSource) -> f64 {
        match source {
            EvidenceSource::ModelPrediction => self.model,
            EvidenceSource::LinguisticSignal => self.linguistic,
            EvidenceSource::BehavioralSignal => self.behavioral,
        }
    }
}

/// Persisted shape of a weight vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeightDocument {
    model_weight: f64,
    linguistic_weight: f64,
    behavioral_weight: f64,
    confidence_adjustment_weight: f64,
}

impl TryFrom<WeightDocument> for SkillWeightVector {
    type Error = ConfigurationError;

    fn try_from(doc: WeightDocument) -> Result<Self, Self::Error> {
        Self::new(
            doc.model_weight,
            doc.linguistic_weight,
            doc.behavioral_weight,
            doc.confidence_adjustment_weight,
        )
    }
}

impl From<SkillWeightVector> for WeightDocument {
    fn from(v: SkillWeightVector) -> Self {
        Self {
            model_weight: v.model,
            linguistic_weight: v.linguistic,
            behavioral_weight: v.behavioral,
            confidence_adjustment_weight: v.confidence_adjustment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_sum() {
        let v = SkillWeightVector::new(0.4, 0.3, 0.2, 0.1).unwrap();
        assert!((v.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn accepts_sum_within_tolerance() {
        assert!(SkillWeightVector::new(0.4, 0.3, 0.2, 0.105).is_ok());
        assert!(SkillWeightVector::new(0.4, 0.3, 0.2, 0.095).is_ok());
    }

    #[test]
    fn rejects_sum_outside_tolerance() {
        let err = SkillWeightVector::new(0.5, 0.3, 0.3, 0.1).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidWeights { .. }));
        assert!(SkillWeightVector::new(0.4, 0.3, 0.2, 0.05).is_err());
    }

    #[test]
    fn rejects_component_out_of_range() {
        assert!(SkillWeightVector::new(1.2, -0.2, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(SkillWeightVector::new(f64::NAN, 0.5, 0.5, 0.0).is_err());
    }

    #[test]
    fn source_components_map_to_their_weights() {
        let v = SkillWeightVector::new(0.4, 0.3, 0.2, 0.1).unwrap();
        assert_eq!(v.for_source(EvidenceSource::ModelPrediction), 0.4);
        assert_eq!(v.for_source(EvidenceSource::LinguisticSignal), 0.3);
        assert_eq!(v.for_source(EvidenceSource::BehavioralSignal), 0.2);
    }

    #[test]
    fn deserialization_validates() {
        let bad = r#"{"modelWeight":0.5,"linguisticWeight":0.3,"behavioralWeight":0.3,"confidenceAdjustmentWeight":0.1}"#;
        assert!(serde_json::from_str::<SkillWeightVector>(bad).is_err());

        let good = r#"{"modelWeight":0.4,"linguisticWeight":0.3,"behavioralWeight":0.2,"confidenceAdjustmentWeight":0.1}"#;
        let v: SkillWeightVector = serde_json::from_str(good).unwrap();
        assert_eq!(v.model(), 0.4);
    }
}
