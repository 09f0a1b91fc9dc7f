use std::collections::HashMap;

use crate::errors::SkillfuseResult;

/// A trained per-skill prediction model, consumed as an opaque capability.
pub trait IPredictionModel: Send + Sync {
    /// Ordered feature names the model was trained on. The feature vector
    /// passed to `predict` has exactly this length.
    fn feature_names(&self) -> &[String];

    /// Predict a skill level, nominally in [0.0, 1.0].
    fn predict(&self, features: &[f64]) -> SkillfuseResult<f64>;

    /// Per-feature importances, when the model can report them.
    fn feature_importances(&self) -> Option<HashMap<String, f64>> {
        None
    }

    /// Ensemble capability: `Some` when the model can report per-member outputs.
    fn as_ensemble(&self) -> Option<&dyn IEnsembleModel> {
        None
    }
}

/// Optional capability of tree/bagging ensembles.
pub trait IEnsembleModel: Send + Sync {
    fn member_predictions(&self, features: &[f64]) -> SkillfuseResult<Vec<f64>>;
}
