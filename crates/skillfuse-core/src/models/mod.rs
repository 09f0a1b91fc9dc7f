mod evidence;
mod feature_record;
mod fusion_config;
mod fusion_result;
mod skill;
mod subject;
mod weight_vector;

pub use evidence::{clamp_unit, EvidenceItem, EvidenceKind, EvidenceSource};
pub use feature_record::FeatureRecord;
pub use fusion_config::FusionConfig;
pub use fusion_result::{FusedScore, FusionResult};
pub use skill::Skill;
pub use subject::SubjectId;
pub use weight_vector::SkillWeightVector;
