mod config_backing_store;
mod evidence_source;
mod feature_store;
mod prediction_model;

pub use config_backing_store::IConfigBackingStore;
pub use evidence_source::IEvidenceSource;
pub use feature_store::IFeatureStore;
pub use prediction_model::{IEnsembleModel, IPredictionModel};
