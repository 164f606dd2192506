//! Process Entity
//!
//! A process is an instance of a workflow. Its position is `current_step_index`
//! and its status is derived from that index and the workflow's step count:
//!
//! ```text
//! pendente ──advance──▶ em_andamento ──advance──▶ ... ──advance──▶ concluido
//!     └──────────────(zero-step workflow)──────────────────────────▶ concluido
//! ```

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// No step completed yet
    Pendente,
    /// At least one step completed, more remain
    EmAndamento,
    /// All steps completed (terminal)
    Concluido,
}

impl ProcessStatus {
    /// Status at creation time.
    pub fn initial(step_count: usize) -> Self {
        if step_count == 0 {
            Self::Concluido
        } else {
            Self::Pendente
        }
    }

    /// Status after a step has been completed.
    pub fn after_advance(current_step_index: usize, step_count: usize) -> Self {
        if current_step_index >= step_count {
            Self::Concluido
        } else {
            Self::EmAndamento
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::EmAndamento => "em_andamento",
            Self::Concluido => "concluido",
        }
    }
}

/// Record of a completed workflow step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub step_id: String,
    pub step_name: String,
    pub notes: String,
    /// Free-form user reference, not checked against existing users
    pub performed_by: Option<String>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Fixed at creation
    pub workflow_id: String,
    pub owner_id: Option<String>,
    pub document_ids: Vec<String>,
    pub status: ProcessStatus,
    pub current_step_index: usize,
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Process {
    /// Merge a patch into a copy of this process.
    ///
    /// `workflow_id`, `status`, `current_step_index` and `history` are never
    /// taken from a patch.
    pub fn apply(&self, patch: ProcessPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            workflow_id: self.workflow_id.clone(),
            owner_id: match patch.owner_id {
                Some(owner_id) => owner_id,
                None => self.owner_id.clone(),
            },
            document_ids: match patch.document_ids {
                Some(ids) => dedup_ids(ids),
                None => self.document_ids.clone(),
            },
            status: self.status,
            current_step_index: self.current_step_index,
            history: self.history.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn references_document(&self, document_id: &str) -> bool {
        self.document_ids.iter().any(|id| id == document_id)
    }
}

/// Collapse duplicates, keeping the first occurrence.
pub fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProcess {
    pub name: Option<String>,
    pub description: Option<String>,
    pub workflow_id: Option<String>,
    pub owner_id: Option<String>,
    #[serde(default)]
    pub document_ids: Vec<String>,
}

impl NewProcess {
    pub fn new(name: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            workflow_id: Some(workflow_id.into()),
            ..Default::default()
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn with_documents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Update process payload.
///
/// `workflowId` is accepted only when it equals the current workflow.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub workflow_id: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub owner_id: Option<Option<String>>,
    pub document_ids: Option<Vec<String>>,
}

/// Advance payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceProcess {
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

impl AdvanceProcess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn performed_by(mut self, user_id: impl Into<String>) -> Self {
        self.performed_by = Some(user_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derivation() {
        assert_eq!(ProcessStatus::initial(0), ProcessStatus::Concluido);
        assert_eq!(ProcessStatus::initial(2), ProcessStatus::Pendente);
        assert_eq!(ProcessStatus::after_advance(1, 2), ProcessStatus::EmAndamento);
        assert_eq!(ProcessStatus::after_advance(2, 2), ProcessStatus::Concluido);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(ProcessStatus::EmAndamento).unwrap(), "em_andamento");
        assert_eq!(serde_json::to_value(ProcessStatus::Pendente).unwrap(), "pendente");
        assert_eq!(ProcessStatus::Concluido.as_str(), "concluido");
    }

    #[test]
    fn test_dedup_ids() {
        let ids = vec!["document-2".into(), "document-1".into(), "document-2".into()];
        assert_eq!(dedup_ids(ids), vec!["document-2".to_string(), "document-1".to_string()]);
    }

    #[test]
    fn test_owner_patch_states() {
        let patch: ProcessPatch = serde_json::from_str(r#"{"ownerId": null}"#).unwrap();
        assert_eq!(patch.owner_id, Some(None));

        let patch: ProcessPatch = serde_json::from_str(r#"{"ownerId": "user-1"}"#).unwrap();
        assert_eq!(patch.owner_id, Some(Some("user-1".to_string())));

        let patch: ProcessPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.owner_id, None);
    }
}
