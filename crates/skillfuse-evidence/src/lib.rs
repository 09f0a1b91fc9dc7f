//! # skillfuse-evidence
//!
//! Turns feature records and model outputs into [`EvidenceItem`]s.
//!
//! Three adapters implement [`IEvidenceSource`]:
//! - [`ModelPredictionAdapter`]: one trained model per skill, plus its top features
//! - [`LinguisticSignalAdapter`]: static rules over the latest linguistic record
//! - [`BehavioralSignalAdapter`]: static rules over the latest behavioral record
//!
//! None of them fail: errors are logged and the source contributes nothing.
//!
//! [`EvidenceItem`]: skillfuse_core::EvidenceItem
//! [`IEvidenceSource`]: skillfuse_core::traits::IEvidenceSource

pub mod adapters;
pub mod confidence;
pub mod feature_vector;
pub mod registry;
pub mod signals;

pub use adapters::{BehavioralSignalAdapter, LinguisticSignalAdapter, ModelPredictionAdapter};
pub use confidence::ConfidenceEstimator;
pub use feature_vector::{FeatureOrigin, FeatureVector};
pub use registry::ModelRegistry;
pub use signals::SignalRule;
