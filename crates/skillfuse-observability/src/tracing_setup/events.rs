//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use skillfuse_core::{EvidenceSource, Skill, SubjectId};

/// A weight configuration became active.
pub fn config_loaded(version: &str, origin: &str, skills: usize) {
    tracing::info!(
        event = "config_loaded",
        version = %version,
        origin = %origin,
        skills = skills,
        "weight configuration loaded"
    );
}

/// The persisted configuration could not be used; built-in defaults apply.
pub fn config_fallback(path: &str, reason: &str) {
    tracing::warn!(
        event = "config_fallback",
        path = %path,
        reason = %reason,
        "falling back to built-in weight configuration"
    );
}

/// A validated configuration replaced the active one.
pub fn config_updated(previous_version: &str, version: &str) {
    tracing::info!(
        event = "config_updated",
        previous_version = %previous_version,
        version = %version,
        "weight configuration updated"
    );
}

/// Persisting an already-applied update failed. The in-memory config stays.
pub fn persistence_failed(path: &str, reason: &str) {
    tracing::warn!(
        event = "persistence_failed",
        path = %path,
        reason = %reason,
        "failed to persist weight configuration; in-memory update kept"
    );
}

/// An evidence source failed and contributed nothing.
pub fn evidence_degraded(source: EvidenceSource, subject: &SubjectId, skill: Skill, reason: &str) {
    tracing::warn!(
        event = "evidence_degraded",
        source = source.as_str(),
        subject = %subject,
        skill = %skill,
        reason = %reason,
        "evidence source degraded to empty"
    );
}

/// A skill was left out of a multi-skill result.
pub fn skill_omitted(subject: &SubjectId, skill: Skill, reason: &str) {
    tracing::error!(
        event = "skill_omitted",
        subject = %subject,
        skill = %skill,
        reason = %reason,
        "skill omitted from assessment"
    );
}

/// A fusion finished.
pub fn fusion_completed(subject: &SubjectId, skill: Skill, score: f64, confidence: f64, evidence: usize) {
    tracing::debug!(
        event = "fusion_completed",
        subject = %subject,
        skill = %skill,
        score = score,
        confidence = confidence,
        evidence = evidence,
        "fusion completed"
    );
}
