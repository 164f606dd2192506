//! Workflow Entity
//!
//! A workflow is an ordered list of steps. Processes walk through the steps
//! of their workflow one `advance` at a time.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 1-based position within the workflow
    pub order: u32,
}

impl WorkflowStep {
    /// Name used when a step is submitted without one
    pub fn default_name(order: u32) -> String {
        format!("Step {}", order)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<WorkflowStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step_at(&self, index: usize) -> Option<&WorkflowStep> {
        self.steps.get(index)
    }
}

/// Step as submitted by clients; id and order are assigned by the store
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl StepInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepInput>,
}

impl NewWorkflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_steps<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = names.into_iter().map(StepInput::named).collect();
        self
    }
}

/// Update workflow payload. A supplied `steps` list replaces all steps.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<StepInput>>,
}
