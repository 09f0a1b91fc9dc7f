use serde::{Deserialize, Serialize};

/// Where a piece of evidence came from.
///
/// The declaration order is the fixed tie-break precedence used when
/// ranking evidence of equal effective weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    ModelPrediction,
    LinguisticSignal,
    BehavioralSignal,
}

impl EvidenceSource {
    pub const ALL: [EvidenceSource; 3] = [
        Self::ModelPrediction,
        Self::LinguisticSignal,
        Self::BehavioralSignal,
    ];

    /// Tie-break rank: lower wins.
    pub fn precedence(self) -> u8 {
        match self {
            Self::ModelPrediction => 0,
            Self::LinguisticSignal => 1,
            Self::BehavioralSignal => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModelPrediction => "model_prediction",
            Self::LinguisticSignal => "linguistic_signal",
            Self::BehavioralSignal => "behavioral_signal",
        }
    }
}

/// What an evidence item describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Linguistic,
    Behavioral,
    Contextual,
}

/// A single weighted, sourced observation feeding a skill's fused score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub source: EvidenceSource,
    pub kind: EvidenceKind,
    pub text: String,
    /// Observed skill level [0.0, 1.0].
    pub score: f64,
    /// Trust in the observation [0.0, 1.0].
    pub confidence: f64,
    /// How strongly the observation bears on the skill [0.0, 1.0].
    pub relevance: f64,
    /// Source weight [0.0, 1.0]. `None` is back-filled from the skill's weight vector.
    pub weight: Option<f64>,
}

impl EvidenceItem {
    /// Create an item with no explicit weight. Numeric fields are clamped to [0.0, 1.0].
    pub fn new(
        source: EvidenceSource,
        kind: EvidenceKind,
        text: impl Into<String>,
        score: f64,
        confidence: f64,
        relevance: f64,
    ) -> Self {
        Self {
            source,
            kind,
            text: text.into(),
            score: clamp_unit(score),
            confidence: clamp_unit(confidence),
            relevance: clamp_unit(relevance),
            weight: None,
        }
    }

    /// The same item carrying an explicit weight.
    pub fn with_weight(self, weight: f64) -> Self {
        Self {
            weight: Some(clamp_unit(weight)),
            ..self
        }
    }

    /// Keep an explicit weight, otherwise take `fallback`.
    pub fn or_weight(self, fallback: f64) -> Self {
        match self.weight {
            Some(_) => self,
            None => self.with_weight(fallback),
        }
    }
}

/// Clamp to [0.0, 1.0], mapping NaN to 0.0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_clamps() {
        let item = EvidenceItem::new(
            EvidenceSource::LinguisticSignal,
            EvidenceKind::Linguistic,
            "x",
            1.4,
            -0.2,
            f64::NAN,
        );
        assert_eq!(item.score, 1.0);
        assert_eq!(item.confidence, 0.0);
        assert_eq!(item.relevance, 0.0);
        assert_eq!(item.weight, None);
    }

    #[test]
    fn or_weight_keeps_explicit_weight() {
        let item = EvidenceItem::new(
            EvidenceSource::ModelPrediction,
            EvidenceKind::Contextual,
            "x",
            0.5,
            0.5,
            1.0,
        );
        assert_eq!(item.clone().or_weight(0.3).weight, Some(0.3));
        assert_eq!(item.with_weight(0.7).or_weight(0.3).weight, Some(0.7));
    }

    #[test]
    fn precedence_follows_declaration_order() {
        let mut sources = vec![
            EvidenceSource::BehavioralSignal,
            EvidenceSource::ModelPrediction,
            EvidenceSource::LinguisticSignal,
        ];
        sources.sort_by_key(|s| s.precedence());
        assert_eq!(sources, EvidenceSource::ALL.to_vec());
    }
}
