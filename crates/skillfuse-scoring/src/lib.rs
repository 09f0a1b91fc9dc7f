//! # skillfuse-scoring
//!
//! Entry point of the engine. [`SkillScoringService`] loads a skill's weight
//! vector, collects evidence from every source concurrently, back-fills
//! missing weights and fuses the result.

pub mod bootstrap;
pub mod service;

pub use bootstrap::build_service;
pub use service::SkillScoringService;
