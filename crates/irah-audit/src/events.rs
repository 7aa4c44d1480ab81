use serde::Serialize;
use tracing::{info, warn};

pub const EVALUATION_SAVED: &str = "evaluation.saved";
pub const EVALUATION_REFUSED: &str = "evaluation.refused";

const RESOURCE_EVALUATION: &str = "evaluation";

/// A structured audit event for a persistence decision.
///
/// Events are logged via `tracing`; with the JSON subscriber they land as
/// one machine-readable line each, with every field under `audit.*`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    /// An evaluation was written to the record store.
    pub fn evaluation_saved(case_id: &str, actor: &str) -> Self {
        Self::new(EVALUATION_SAVED, RESOURCE_EVALUATION, case_id, actor)
    }

    /// An evaluation was computed but not persisted.
    pub fn evaluation_refused(case_id: &str, actor: &str, reason: &str) -> Self {
        Self::new(EVALUATION_REFUSED, RESOURCE_EVALUATION, case_id, actor)
            .with_details(serde_json::json!({ "reason": reason }))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing. Refusals are logged at warn level.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        if self.action == EVALUATION_REFUSED {
            warn!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.actor = %self.actor,
                audit.details = %details,
                "audit event"
            );
        } else {
            info!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.actor = %self.actor,
                audit.details = %details,
                "audit event"
            );
        }
    }
}
