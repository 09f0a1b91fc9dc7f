use chrono::Utc;
use skillfuse_core::{EngineConfig, EvidenceSource, Skill, SubjectId};
use skillfuse_evidence::ModelRegistry;
use skillfuse_scoring::build_service;
use skillfuse_storage::{FeatureKind, SqliteFeatureStore};
use test_fixtures::{fixture_text, record};

#[tokio::test]
async fn service_reads_engine_config_and_sqlite_features() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("features.db");
    let weights = dir.path().join("weights.json");
    std::fs::write(&weights, fixture_text("weights/valid_v1.json")).unwrap();

    {
        let store = SqliteFeatureStore::open(&db, 1_000).unwrap();
        store
            .insert_record(
                FeatureKind::Behavioral,
                &record("s-1", &[("task_completion_rate", 0.8), ("debug_iterations", 6.0)], Utc::now()),
            )
            .unwrap();
    }

    let config = EngineConfig::from_toml(&format!(
        "feature_db_path = {:?}\nweight_config_path = {:?}\npersist_updates = false\nlog_level = \"warn\"\n",
        db.display().to_string(),
        weights.display().to_string(),
    ))
    .unwrap();

    let service = build_service(&config, ModelRegistry::new()).unwrap();
    let result = service
        .score_skill(&SubjectId::new("s-1"), Skill::ProblemSolving)
        .await
        .unwrap();

    assert_eq!(service.config_store().get().description, "Pilot cohort weights");
    assert_eq!(result.evidence.len(), 2);
    for item in &result.evidence {
        assert_eq!(item.source, EvidenceSource::BehavioralSignal);
        // problem_solving behavioralWeight in the fixture document
        assert_eq!(item.weight, Some(0.3));
    }
}

#[tokio::test]
async fn defaults_apply_without_weight_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig {
        feature_db_path: dir.path().join("f.db").display().to_string(),
        ..EngineConfig::default()
    };

    let service = build_service(&config, ModelRegistry::new()).unwrap();
    let result = service
        .score_skill(&SubjectId::new("nobody"), Skill::Creativity)
        .await
        .unwrap();

    assert_eq!(service.config_store().path(), None);
    assert_eq!(result.score, 0.5);
    assert_eq!(result.confidence, 0.3);
}
