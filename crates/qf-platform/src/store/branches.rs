use chrono::Utc;
use tracing::{debug, info, warn};

use super::{require_text, reject_blank, PlatformStore};
use crate::domain::{Branch, BranchPatch, NewBranch};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

impl PlatformStore {
    pub fn list_branches(&self) -> Vec<Branch> {
        self.branches.values().cloned().collect()
    }

    pub fn find_branch(&self, id: &str) -> Option<&Branch> {
        self.branches.get(id)
    }

    pub fn get_branch(&self, id: &str) -> Result<Branch> {
        self
            .find_branch(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("Branch", id))
    }

    pub fn branch_exists(&self, id: &str) -> bool {
        self.branches.contains_key(id)
    }

    pub fn create_branch(&mut self, payload: NewBranch) -> Result<Branch> {
        let name = require_text(payload.name, "Branch name is required.")?;

        let now = Utc::now();
        let branch = Branch {
            id: self.sequence.next(prefix::BRANCH),
            name,
            description: payload.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        info!(branch_id = %branch.id, name = %branch.name, "Branch created");
        self.branches.insert(branch.id.clone(), branch.clone());
        Ok(branch)
    }

    pub fn update_branch(&mut self, id: &str, patch: BranchPatch) -> Result<Branch> {
        let current = self
            .find_branch(id)
            .ok_or_else(|| PlatformError::not_found("Branch", id))?;
        reject_blank(patch.name.as_ref(), "Branch name is required.")?;

        let updated = current.apply(patch, Utc::now());

        debug!(branch_id = %id, "Branch updated");
        self.branches.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    pub fn delete_branch(&mut self, id: &str) -> Result<Branch> {
        if !self.branch_exists(id) {
            return Err(PlatformError::not_found("Branch", id));
        }

        if self.sectors.values().any(|s| s.branch_id == id) {
            warn!(branch_id = %id, "Branch delete blocked by sectors");
            return Err(PlatformError::conflict(
                "Remove or move the sectors of this branch before deleting it.",
            ));
        }
        if self.documents.values().any(|d| d.branch_id == id) {
            warn!(branch_id = %id, "Branch delete blocked by documents");
            return Err(PlatformError::conflict(
                "Remove or update the documents of this branch before deleting it.",
            ));
        }

        let branch = self
            .branches
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("Branch", id))?;
        info!(branch_id = %id, "Branch deleted");
        Ok(branch)
    }
}
