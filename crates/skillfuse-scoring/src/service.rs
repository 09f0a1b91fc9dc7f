//! SkillScoringService: the per-request orchestration.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use skillfuse_config::WeightConfigStore;
use skillfuse_core::errors::SkillfuseResult;
use skillfuse_core::traits::{IEvidenceSource, IFeatureStore};
use skillfuse_core::{EvidenceItem, FusionConfig, FusionResult, Skill, SubjectId};
use skillfuse_evidence::{
    BehavioralSignalAdapter, LinguisticSignalAdapter, ModelPredictionAdapter, ModelRegistry,
};
use skillfuse_fusion::FusionEngine;
use skillfuse_observability::events;
use tokio::task::JoinSet;
use tracing::debug;

/// Scores subjects on skills. Cheap to clone; every clone shares the same
/// config store, evidence sources and fusion engine.
#[derive(Clone)]
pub struct SkillScoringService {
    config: Arc<WeightConfigStore>,
    model: Arc<dyn IEvidenceSource>,
    linguistic: Arc<dyn IEvidenceSource>,
    behavioral: Arc<dyn IEvidenceSource>,
    engine: Arc<FusionEngine>,
    persist_updates: bool,
}

impl SkillScoringService {
    /// A service over explicit evidence sources.
    pub fn new(
        config: Arc<WeightConfigStore>,
        model: Arc<dyn IEvidenceSource>,
        linguistic: Arc<dyn IEvidenceSource>,
        behavioral: Arc<dyn IEvidenceSource>,
    ) -> Self {
        Self {
            config,
            model,
            linguistic,
            behavioral,
            engine: Arc::new(FusionEngine::new()),
            persist_updates: true,
        }
    }

    /// A service wiring the standard adapters over one feature store.
    pub fn from_parts(
        config: Arc<WeightConfigStore>,
        registry: Arc<ModelRegistry>,
        store: Arc<dyn IFeatureStore>,
    ) -> Self {
        Self::new(
            config,
            Arc::new(ModelPredictionAdapter::new(registry, Arc::clone(&store))),
            Arc::new(LinguisticSignalAdapter::new(Arc::clone(&store))),
            Arc::new(BehavioralSignalAdapter::new(store)),
        )
    }

    pub fn with_engine(mut self, engine: FusionEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// Whether [`update_weights`](Self::update_weights) persists the new config.
    pub fn with_persist_updates(mut self, persist: bool) -> Self {
        self.persist_updates = persist;
        self
    }

    /// The skills this service scores.
    pub fn skills(&self) -> &'static [Skill] {
        &Skill::ALL
    }

    pub fn config_store(&self) -> &Arc<WeightConfigStore> {
        &self.config
    }

    /// Validate and activate `new_config` for every later request.
    pub fn update_weights(&self, new_config: FusionConfig) -> SkillfuseResult<()> {
        self.config.update(new_config, self.persist_updates)
    }

    /// Fuse all evidence for one subject and skill.
    ///
    /// Fails only when the active config has no weights for `skill`; every
    /// other failure degrades the affected source to no evidence.
    pub async fn score_skill(&self, subject: &SubjectId, skill: Skill) -> SkillfuseResult<FusionResult> {
        // One snapshot weights every item of this fusion.
        let weights = self.config.weights_for(skill)?;

        let (model, linguistic, behavioral) = tokio::join!(
            collect_blocking(&self.model, subject, skill),
            collect_blocking(&self.linguistic, subject, skill),
            collect_blocking(&self.behavioral, subject, skill),
        );

        // Fixed source order keeps ranking ties deterministic.
        let items: Vec<EvidenceItem> = model
            .into_iter()
            .chain(linguistic)
            .chain(behavioral)
            .map(|item| {
                let fallback = weights.for_source(item.source);
                item.or_weight(fallback)
            })
            .collect();

        let fused = self.engine.fuse(&items, skill);
        events::fusion_completed(subject, skill, fused.score, fused.confidence, fused.evidence.len());
        Ok(FusionResult::from_fused(subject.clone(), skill, fused))
    }

    /// Score every skill concurrently. Skills that fail are logged and left
    /// out of the map.
    pub async fn score_all_skills(&self, subject: &SubjectId) -> BTreeMap<Skill, FusionResult> {
        let mut tasks = JoinSet::new();
        for &skill in self.skills() {
            let service = self.clone();
            let subject = subject.clone();
            tasks.spawn(async move {
                let result = service.score_skill(&subject, skill).await;
                (skill, result)
            });
        }

        let mut pending: BTreeSet<Skill> = self.skills().iter().copied().collect();
        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((skill, Ok(result))) => {
                    pending.remove(&skill);
                    results.insert(skill, result);
                }
                Ok((skill, Err(e))) => {
                    pending.remove(&skill);
                    events::skill_omitted(subject, skill, &e.to_string());
                }
                Err(e) => debug!(subject = %subject, error = %e, "skill scoring task aborted"),
            }
        }
        // Whatever is still pending belongs to a task that panicked.
        for skill in pending {
            events::skill_omitted(subject, skill, "scoring task panicked");
        }
        results
    }
}

/// Run one source's `collect` on the blocking pool. A panicked task counts
/// as no evidence.
async fn collect_blocking(
    source: &Arc<dyn IEvidenceSource>,
    subject: &SubjectId,
    skill: Skill,
) -> Vec<EvidenceItem> {
    let task_source = Arc::clone(source);
    let task_subject = subject.clone();
    let handle = tokio::task::spawn_blocking(move || task_source.collect(&task_subject, skill));
    match handle.await {
        Ok(items) => items,
        Err(e) => {
            events::evidence_degraded(source.source(), subject, skill, &format!("adapter task failed: {e}"));
            Vec::new()
        }
    }
}

impl std::fmt::Debug for SkillScoringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillScoringService")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("persist_updates", &self.persist_updates)
            .finish()
    }
}
