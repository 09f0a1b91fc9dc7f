use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::ConfigurationError;
use crate::models::{Skill, SkillWeightVector};

/// The process-wide weight configuration.
///
/// Owned by the weight config store and replaced atomically; never patched
/// in place once published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionConfig {
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub weights: BTreeMap<Skill, SkillWeightVector>,
}

impl FusionConfig {
    /// The built-in per-skill defaults.
    pub fn builtin_defaults() -> Self {
        let weights = defaults::DEFAULT_SKILL_WEIGHTS
            .iter()
            .filter_map(|(skill, components)| {
                SkillWeightVector::from_array(*components)
                    .ok()
                    .map(|v| (*skill, v))
            })
            .collect();
        Self {
            version: defaults::DEFAULT_CONFIG_VERSION.to_string(),
            description: defaults::DEFAULT_CONFIG_DESCRIPTION.to_string(),
            weights,
        }
    }

    /// Validate every contained weight vector. The first failure names its skill.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (skill, vector) in &self.weights {
            vector.validate().map_err(|e| match e {
                ConfigurationError::InvalidWeights { reason } => {
                    ConfigurationError::InvalidWeights {
                        reason: format!("{skill}: {reason}"),
                    }
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Weight vector for `skill`, or `UnknownSkill`.
    pub fn weights_for(&self, skill: Skill) -> Result<SkillWeightVector, ConfigurationError> {
        self.weights
            .get(&skill)
            .copied()
            .ok_or(ConfigurationError::UnknownSkill(skill))
    }

    /// Copy of this config with one skill's vector replaced wholesale.
    pub fn with_weights(&self, skill: Skill, vector: SkillWeightVector) -> Self {
        let mut next = self.clone();
        next.weights.insert(skill, vector);
        next
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self::builtin_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults_cover_every_skill() {
        let config = FusionConfig::builtin_defaults();
        assert_eq!(config.version, "1.0.0");
        for skill in Skill::ALL {
            assert!(config.weights_for(skill).is_ok(), "missing {skill}");
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn skills_emphasize_different_sources() {
        let config = FusionConfig::builtin_defaults();
        let communication = config.weights_for(Skill::Communication).unwrap();
        let collaboration = config.weights_for(Skill::Collaboration).unwrap();
        assert!(communication.linguistic() > communication.behavioral());
        assert!(collaboration.behavioral() > collaboration.linguistic());
    }

    #[test]
    fn missing_skill_is_unknown() {
        let mut config = FusionConfig::builtin_defaults();
        config.weights.remove(&Skill::Creativity);
        assert_eq!(
            config.weights_for(Skill::Creativity),
            Err(ConfigurationError::UnknownSkill(Skill::Creativity))
        );
    }

    #[test]
    fn document_with_one_bad_entry_fails_whole_parse() {
        let doc = r#"{
            "version": "1.0.0",
            "weights": {
                "communication": {"modelWeight":0.3,"linguisticWeight":0.45,"behavioralWeight":0.15,"confidenceAdjustmentWeight":0.1},
                "creativity": {"modelWeight":0.9,"linguisticWeight":0.45,"behavioralWeight":0.15,"confidenceAdjustmentWeight":0.1}
            }
        }"#;
        assert!(serde_json::from_str::<FusionConfig>(doc).is_err());
    }
}
