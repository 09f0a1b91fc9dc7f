//! # skillfuse-core
//!
//! Foundation crate for the SkillFuse scoring engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{SkillfuseError, SkillfuseResult};
pub use models::{
    EvidenceItem, EvidenceKind, EvidenceSource, FeatureRecord, FusedScore, FusionConfig, FusionResult,
    Skill, SkillWeightVector, SubjectId,
};
