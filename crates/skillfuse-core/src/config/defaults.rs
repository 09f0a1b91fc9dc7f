// Single source of truth for all default values.

use crate::models::Skill;

// --- Weight configuration ---
pub const DEFAULT_CONFIG_VERSION: &str = "1.0.0";
pub const DEFAULT_CONFIG_DESCRIPTION: &str = "Built-in per-skill evidence weights";

/// Built-in weight vectors, in `Skill::ALL` order:
/// `[model, linguistic, behavioral, confidence_adjustment]`.
///
/// Skills deliberately lean on different sources: communication on language,
/// collaboration and problem solving on behavior, critical thinking on the model.
pub const DEFAULT_SKILL_WEIGHTS: [(Skill, [f64; 4]); 5] = [
    (Skill::Communication, [0.30, 0.45, 0.15, 0.10]),
    (Skill::Collaboration, [0.30, 0.20, 0.40, 0.10]),
    (Skill::CriticalThinking, [0.45, 0.30, 0.15, 0.10]),
    (Skill::Creativity, [0.35, 0.35, 0.20, 0.10]),
    (Skill::ProblemSolving, [0.40, 0.15, 0.35, 0.10]),
];

// --- Engine ---
pub const DEFAULT_WEIGHT_CONFIG_PATH: Option<&str> = None;
pub const DEFAULT_PERSIST_UPDATES: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ENV_VAR: &str = "SKILLFUSE_LOG";

// --- Storage ---
pub const DEFAULT_FEATURE_DB_FILENAME: &str = "features.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
