pub mod feature_ops;

pub use feature_ops::FeatureKind;
