use thiserror::Error;

use irah_audit::events::AuditEvent;
use irah_core::error::CoreError;
use irah_core::models::observation::ClinicalObservation;
use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::ScoreResult;
use irah_scoring::config::ScoringConfig;
use irah_scoring::error::ScoringError;
use irah_scoring::scorer;
use irah_storage::error::StorageError;
use irah_storage::store::RecordStore;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("out of range input: {0}")]
    OutOfRangeInput(#[from] ScoringError),

    /// The score was computed but cannot be persisted. `result` is still
    /// valid for display.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String, result: ScoreResult },

    #[error("invalid record: {0}")]
    Record(CoreError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Scores observations and persists them to an injected record store.
pub struct Evaluator<S> {
    store: S,
    config: ScoringConfig,
    actor: String,
}

impl<S: RecordStore> Evaluator<S> {
    pub fn new(store: S, config: ScoringConfig, actor: impl Into<String>) -> Self {
        Self {
            store,
            config,
            actor: actor.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score without persisting.
    pub fn evaluate(&self, observation: &ClinicalObservation) -> Result<ScoreResult, ScoringError> {
        scorer::score(observation, &self.config)
    }

    /// Score and persist one evaluation.
    ///
    /// Out-of-range input is rejected before anything is written. A blank
    /// case identifier refuses persistence but still reports the score.
    pub async fn save(
        &self,
        case_id: Option<&str>,
        observation: &ClinicalObservation,
        timestamp: jiff::Timestamp,
    ) -> Result<EvaluationRecord, EvaluationError> {
        let result = self.evaluate(observation)?;
        let case_id = case_id.unwrap_or_default();

        let record = match EvaluationRecord::new(case_id, timestamp, observation, &result) {
            Ok(record) => record,
            Err(CoreError::MissingRequiredField(field)) => {
                AuditEvent::evaluation_refused(case_id, &self.actor, &format!("missing {field}"))
                    .emit();
                return Err(EvaluationError::MissingRequiredField { field, result });
            }
            Err(e) => return Err(EvaluationError::Record(e)),
        };

        self.store.append(&record).await?;
        AuditEvent::evaluation_saved(&record.case_id, &self.actor)
            .with_details(serde_json::json!({
                "index": record.index,
                "tier": record.tier.id(),
            }))
            .emit();
        Ok(record)
    }

    /// The full evaluation history, in insertion order.
    pub async fn history(&self) -> Result<Vec<EvaluationRecord>, StorageError> {
        self.store.load_all().await
    }
}
