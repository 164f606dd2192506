//! Process lifecycle and the advance state machine.

use chrono::Utc;
use tracing::{debug, info, warn};

use super::{blank_as_clear, non_blank, require_text, reject_blank, PlatformStore};
use crate::domain::{
    dedup_ids, AdvanceProcess, HistoryEntry, NewProcess, Process, ProcessPatch, ProcessStatus,
};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

const UNKNOWN_OWNER: &str = "The given owner does not exist.";

impl PlatformStore {
    pub fn list_processes(&self) -> Vec<Process> {
        self.processes.values().cloned().collect()
    }

    pub fn find_process(&self, id: &str) -> Option<&Process> {
        self.processes.get(id)
    }

    pub fn get_process(&self, id: &str) -> Result<Process> {
        self
            .find_process(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("Process", id))
    }

    pub fn process_exists(&self, id: &str) -> bool {
        self.processes.contains_key(id)
    }

    pub fn process_history(&self, id: &str) -> Result<Vec<HistoryEntry>> {
        self
            .find_process(id)
            .map(|p| p.history.clone())
            .ok_or_else(|| PlatformError::not_found("Process", id))
    }

    pub fn create_process(&mut self, payload: NewProcess) -> Result<Process> {
        let name = require_text(payload.name, "Process name is required.")?;
        let workflow_id = require_text(payload.workflow_id, "Process workflow is required.")?;
        let step_count = self
            .find_workflow(&workflow_id)
            .ok_or_else(|| PlatformError::validation("The given workflow does not exist."))?
            .step_count();
        let owner_id = non_blank(payload.owner_id);
        if let Some(ref owner_id) = owner_id {
            if !self.user_exists(owner_id) {
                return Err(PlatformError::validation(UNKNOWN_OWNER));
            }
        }
        self.ensure_documents_exist(&payload.document_ids)?;

        let now = Utc::now();
        let process = Process {
            id: self.sequence.next(prefix::PROCESS),
            name,
            description: payload.description.unwrap_or_default(),
            workflow_id,
            owner_id,
            document_ids: dedup_ids(payload.document_ids),
            status: ProcessStatus::initial(step_count),
            current_step_index: 0,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        info!(
            process_id = %process.id,
            workflow_id = %process.workflow_id,
            status = process.status.as_str(),
            "Process created"
        );
        self.processes.insert(process.id.clone(), process.clone());
        Ok(process)
    }

    /// Complete the current step of a process.
    ///
    /// The workflow is read at call time, so edits made to it after the
    /// process started apply to the remaining steps.
    pub fn advance_process(&mut self, id: &str, payload: AdvanceProcess) -> Result<Process> {
        let current = self
            .find_process(id)
            .ok_or_else(|| PlatformError::not_found("Process", id))?;
        let workflow = self
            .find_workflow(&current.workflow_id)
            .ok_or_else(|| {
                PlatformError::validation("The workflow of this process no longer exists.")
            })?;
        let step = workflow
            .step_at(current.current_step_index)
            .ok_or_else(|| PlatformError::validation("Process already completed."))?;

        let completed_at = Utc::now();
        let entry = HistoryEntry {
            step_id: step.id.clone(),
            step_name: step.name.clone(),
            notes: payload.notes.unwrap_or_default(),
            performed_by: payload.performed_by,
            completed_at,
        };

        let mut advanced = current.clone();
        advanced.history.push(entry);
        advanced.current_step_index += 1;
        advanced.status =
            ProcessStatus::after_advance(advanced.current_step_index, workflow.step_count());
        advanced.updated_at = completed_at;

        info!(
            process_id = %id,
            step = %step.name,
            current_step_index = advanced.current_step_index,
            status = advanced.status.as_str(),
            "Process advanced"
        );
        self.processes.insert(advanced.id.clone(), advanced.clone());
        Ok(advanced)
    }

    pub fn update_process(&mut self, id: &str, patch: ProcessPatch) -> Result<Process> {
        let patch = ProcessPatch {
            owner_id: blank_as_clear(patch.owner_id),
            ..patch
        };
        let current = self
            .find_process(id)
            .ok_or_else(|| PlatformError::not_found("Process", id))?;
        if let Some(ref workflow_id) = patch.workflow_id {
            if workflow_id != &current.workflow_id {
                return Err(PlatformError::validation(
                    "The workflow of a process cannot be changed.",
                ));
            }
        }
        reject_blank(patch.name.as_ref(), "Process name is required.")?;
        if let Some(Some(ref owner_id)) = patch.owner_id {
            if !self.user_exists(owner_id) {
                return Err(PlatformError::validation(UNKNOWN_OWNER));
            }
        }
        if let Some(ref document_ids) = patch.document_ids {
            self.ensure_documents_exist(document_ids)?;
        }

        let updated = current.apply(patch, Utc::now());

        debug!(process_id = %id, "Process updated");
        self.processes.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    pub fn delete_process(&mut self, id: &str) -> Result<Process> {
        if !self.process_exists(id) {
            return Err(PlatformError::not_found("Process", id));
        }

        if self.activities.values().any(|a| a.process_id == id) {
            warn!(process_id = %id, "Process delete blocked by activities");
            return Err(PlatformError::conflict(
                "Processes with activities cannot be deleted.",
            ));
        }

        let process = self
            .processes
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("Process", id))?;
        info!(process_id = %id, "Process deleted");
        Ok(process)
    }

    fn ensure_documents_exist(&self, document_ids: &[String]) -> Result<()> {
        match document_ids.iter().find(|id| !self.document_exists(id)) {
            Some(missing) => Err(PlatformError::validation(format!(
                "Document {} not found.",
                missing
            ))),
            None => Ok(()),
        }
    }
}
