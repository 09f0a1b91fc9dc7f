//! Tuning constants for confidence estimation and evidence generation.
//!
//! Most of these values are hand-tuned rather than derived. They are kept
//! here by name so they can be recalibrated in one place.

/// SkillFuse version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Weight vectors ---

/// Allowed deviation of a weight vector's component sum from 1.0.
/// Absorbs floating-point drift from serialization round-trips.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

// --- Fusion ---

/// Maximum number of evidence items attached to a fusion result.
pub const MAX_TOP_EVIDENCE: usize = 5;

/// Score reported when no evidence carries any effective weight.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Confidence reported when no evidence carries any effective weight.
pub const NEUTRAL_CONFIDENCE: f64 = 0.3;

// --- Confidence estimation ---

/// Lower bound of any estimated model confidence.
pub const MIN_MODEL_CONFIDENCE: f64 = 0.3;

/// Upper bound of any estimated model confidence.
pub const MAX_MODEL_CONFIDENCE: f64 = 0.95;

/// Fallback confidence range used when estimation fails: the raw
/// prediction clamped into `[FALLBACK_CONFIDENCE_MIN, FALLBACK_CONFIDENCE_MAX]`.
pub const FALLBACK_CONFIDENCE_MIN: f64 = 0.5;
pub const FALLBACK_CONFIDENCE_MAX: f64 = 0.85;

/// Multiplier applied to member-prediction variance: `1 / (1 + k·var)`.
pub const VARIANCE_SENSITIVITY: f64 = 10.0;

/// Distance from 0 and 1 at which extremity confidence saturates at 1.0.
pub const EXTREMITY_SATURATION_DISTANCE: f64 = 0.2;

/// Component weights when the model exposes member predictions.
pub const ENSEMBLE_COMPONENT_WEIGHT: f64 = 0.5;
pub const EXTREMITY_WEIGHT_WITH_ENSEMBLE: f64 = 0.3;
pub const COMPLETENESS_WEIGHT_WITH_ENSEMBLE: f64 = 0.2;

/// Component weights when the model has no member predictions.
pub const EXTREMITY_WEIGHT_SOLO: f64 = 0.6;
pub const COMPLETENESS_WEIGHT_SOLO: f64 = 0.4;

// --- Evidence generation ---

/// Confidence damping for feature-importance evidence derived from a prediction.
pub const FEATURE_CONFIDENCE_DAMPING: f64 = 0.8;

/// Number of top feature-importance items emitted per prediction.
pub const TOP_FEATURE_COUNT: usize = 3;

/// Relevance and confidence of linguistic signal-table evidence.
pub const LINGUISTIC_RELEVANCE: f64 = 0.85;
pub const LINGUISTIC_CONFIDENCE: f64 = 0.7;

/// Relevance and confidence of behavioral signal-table evidence.
pub const BEHAVIORAL_RELEVANCE: f64 = 0.8;
pub const BEHAVIORAL_CONFIDENCE: f64 = 0.6;

/// Name of the skill-specific derived entry in a model feature vector.
pub const SKILL_SIGNAL_FEATURE: &str = "skill_signal_mean";
