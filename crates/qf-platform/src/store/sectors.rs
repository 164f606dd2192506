use chrono::Utc;
use tracing::{debug, info, warn};

use super::{require_text, reject_blank, PlatformStore};
use crate::domain::{NewSector, Sector, SectorPatch};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

const UNKNOWN_BRANCH: &str = "The given branch does not exist.";

impl PlatformStore {
    pub fn list_sectors(&self) -> Vec<Sector> {
        self.sectors.values().cloned().collect()
    }

    pub fn find_sector(&self, id: &str) -> Option<&Sector> {
        self.sectors.get(id)
    }

    pub fn get_sector(&self, id: &str) -> Result<Sector> {
        self
            .find_sector(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("Sector", id))
    }

    pub fn sector_exists(&self, id: &str) -> bool {
        self.sectors.contains_key(id)
    }

    pub fn create_sector(&mut self, payload: NewSector) -> Result<Sector> {
        let name = require_text(payload.name, "Sector name is required.")?;
        let branch_id = require_text(payload.branch_id, "Sector branch is required.")?;
        if !self.branch_exists(&branch_id) {
            return Err(PlatformError::validation(UNKNOWN_BRANCH));
        }

        let now = Utc::now();
        let sector = Sector {
            id: self.sequence.next(prefix::SECTOR),
            name,
            branch_id,
            created_at: now,
            updated_at: now,
        };

        info!(sector_id = %sector.id, branch_id = %sector.branch_id, "Sector created");
        self.sectors.insert(sector.id.clone(), sector.clone());
        Ok(sector)
    }

    pub fn update_sector(&mut self, id: &str, patch: SectorPatch) -> Result<Sector> {
        let current = self
            .find_sector(id)
            .ok_or_else(|| PlatformError::not_found("Sector", id))?;
        reject_blank(patch.name.as_ref(), "Sector name is required.")?;
        if let Some(ref branch_id) = patch.branch_id {
            if !self.branch_exists(branch_id) {
                return Err(PlatformError::validation(UNKNOWN_BRANCH));
            }
        }

        let updated = current.apply(patch, Utc::now());

        debug!(sector_id = %id, "Sector updated");
        self.sectors.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    pub fn delete_sector(&mut self, id: &str) -> Result<Sector> {
        if !self.sector_exists(id) {
            return Err(PlatformError::not_found("Sector", id));
        }

        if self.documents.values().any(|d| d.sector_id.as_deref() == Some(id)) {
            warn!(sector_id = %id, "Sector delete blocked by documents");
            return Err(PlatformError::conflict(
                "Remove or update the documents of this sector before deleting it.",
            ));
        }

        let sector = self
            .sectors
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("Sector", id))?;
        info!(sector_id = %id, "Sector deleted");
        Ok(sector)
    }
}
