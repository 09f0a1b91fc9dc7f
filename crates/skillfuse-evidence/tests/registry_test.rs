use std::sync::Arc;

use skillfuse_core::errors::EvidenceError;
use skillfuse_core::{Skill, SkillfuseError};
use skillfuse_evidence::ModelRegistry;
use test_fixtures::ScriptedModel;

#[test]
fn register_and_lookup() {
    let mut registry = ModelRegistry::new();
    assert!(registry.is_empty());
    registry
        .register(Skill::Creativity, Arc::new(ScriptedModel::new(&["a", "b"], 0.4)))
        .unwrap();

    assert!(registry.contains(Skill::Creativity));
    assert!(registry.get(Skill::Communication).is_none());
    assert_eq!(registry.get(Skill::Creativity).unwrap().feature_names().len(), 2);
    assert_eq!(registry.skills().collect::<Vec<_>>(), vec![Skill::Creativity]);
}

#[test]
fn empty_feature_list_is_rejected() {
    let mut registry = ModelRegistry::new();
    let err = registry
        .register(Skill::Creativity, Arc::new(ScriptedModel::new(&[], 0.4)))
        .unwrap_err();
    assert!(matches!(
        err,
        SkillfuseError::Evidence(EvidenceError::InvalidModel { skill: Skill::Creativity, .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn duplicate_feature_names_are_rejected() {
    let mut registry = ModelRegistry::new();
    let err = registry
        .register(Skill::ProblemSolving, Arc::new(ScriptedModel::new(&["a", "b", "a"], 0.4)))
        .unwrap_err();
    assert!(err.to_string().contains("duplicate feature name \"a\""));
}

#[test]
fn re_registering_replaces() {
    let mut registry = ModelRegistry::new();
    registry
        .register(Skill::Creativity, Arc::new(ScriptedModel::new(&["a"], 0.4)))
        .unwrap();
    registry
        .register(Skill::Creativity, Arc::new(ScriptedModel::new(&["a", "b", "c"], 0.4)))
        .unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(Skill::Creativity).unwrap().feature_names().len(), 3);
}
