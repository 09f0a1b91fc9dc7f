use skillfuse_core::{EvidenceSource, Skill, SubjectId};
use skillfuse_observability::{events, init_tracing, init_tracing_with_filter};

#[test]
fn repeated_initialization_is_harmless() {
    init_tracing_with_filter("debug");
    init_tracing();
    init_tracing_with_filter("warn");
}

#[test]
fn events_emit_under_json_subscriber() {
    init_tracing_with_filter("trace");
    let subject = SubjectId::new("s-1");
    events::config_loaded("1.0.0", "defaults", 5);
    events::config_fallback("/tmp/w.json", "parse error");
    events::config_updated("1.0.0", "1.1.0");
    events::persistence_failed("/tmp/w.json", "read-only");
    events::evidence_degraded(EvidenceSource::ModelPrediction, &subject, Skill::Creativity, "boom");
    events::skill_omitted(&subject, Skill::Creativity, "unknown skill");
    events::fusion_completed(&subject, Skill::Creativity, 0.7, 0.6, 3);
}
