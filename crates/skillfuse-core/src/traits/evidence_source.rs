use crate::models::{EvidenceItem, EvidenceSource, Skill, SubjectId};

/// Turns external data into evidence for one skill.
///
/// `collect` is infallible by contract: implementations catch and log their
/// own failures and return an empty list, so fusion degrades rather than fails.
pub trait IEvidenceSource: Send + Sync {
    fn source(&self) -> EvidenceSource;

    fn collect(&self, subject: &SubjectId, skill: Skill) -> Vec<EvidenceItem>;
}
