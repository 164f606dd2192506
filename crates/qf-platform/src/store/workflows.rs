use chrono::Utc;
use tracing::{debug, info, warn};

use super::{require_text, reject_blank, PlatformStore};
use crate::domain::{NewWorkflow, StepInput, Workflow, WorkflowPatch, WorkflowStep};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

impl PlatformStore {
    pub fn list_workflows(&self) -> Vec<Workflow> {
        self.workflows.values().cloned().collect()
    }

    pub fn find_workflow(&self, id: &str) -> Option<&Workflow> {
        self.workflows.get(id)
    }

    pub fn get_workflow(&self, id: &str) -> Result<Workflow> {
        self
            .find_workflow(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("Workflow", id))
    }

    pub fn workflow_exists(&self, id: &str) -> bool {
        self.workflows.contains_key(id)
    }

    pub fn create_workflow(&mut self, payload: NewWorkflow) -> Result<Workflow> {
        let name = require_text(payload.name, "Workflow name is required.")?;

        let now = Utc::now();
        let steps = self.number_steps(payload.steps);
        let workflow = Workflow {
            id: self.sequence.next(prefix::WORKFLOW),
            name,
            description: payload.description.unwrap_or_default(),
            steps,
            created_at: now,
            updated_at: now,
        };

        info!(workflow_id = %workflow.id, steps = workflow.steps.len(), "Workflow created");
        self.workflows.insert(workflow.id.clone(), workflow.clone());
        Ok(workflow)
    }

    /// Update a workflow. A supplied step list replaces every step, with
    /// fresh ids and orders starting at 1.
    pub fn update_workflow(&mut self, id: &str, patch: WorkflowPatch) -> Result<Workflow> {
        if !self.workflow_exists(id) {
            return Err(PlatformError::not_found("Workflow", id));
        }
        reject_blank(patch.name.as_ref(), "Workflow name is required.")?;

        let steps = patch.steps.map(|steps| self.number_steps(steps));

        let current = self
            .find_workflow(id)
            .ok_or_else(|| PlatformError::not_found("Workflow", id))?;
        let updated = Workflow {
            id: current.id.clone(),
            name: patch.name.unwrap_or_else(|| current.name.clone()),
            description: patch.description.unwrap_or_else(|| current.description.clone()),
            steps: steps.unwrap_or_else(|| current.steps.clone()),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        debug!(workflow_id = %id, steps = updated.steps.len(), "Workflow updated");
        self.workflows.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    pub fn delete_workflow(&mut self, id: &str) -> Result<Workflow> {
        if !self.workflow_exists(id) {
            return Err(PlatformError::not_found("Workflow", id));
        }

        if self.processes.values().any(|p| p.workflow_id == id) {
            warn!(workflow_id = %id, "Workflow delete blocked by processes");
            return Err(PlatformError::conflict(
                "Workflows used by processes cannot be deleted.",
            ));
        }

        let workflow = self
            .workflows
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("Workflow", id))?;
        info!(workflow_id = %id, "Workflow deleted");
        Ok(workflow)
    }

    fn number_steps(&mut self, steps: Vec<StepInput>) -> Vec<WorkflowStep> {
        steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                let order = index as u32 + 1;
                WorkflowStep {
                    id: self.sequence.next(prefix::WORKFLOW_STEP),
                    name: step
                        .name
                        .filter(|n| !n.trim().is_empty())
                        .unwrap_or_else(|| WorkflowStep::default_name(order)),
                    description: step.description.unwrap_or_default(),
                    order,
                }
            })
            .collect()
    }
}
