use chrono::Utc;
use tracing::{debug, info};

use super::{blank_as_clear, non_blank, require_text, reject_blank, PlatformStore};
use crate::domain::{Activity, ActivityFilter, ActivityPatch, NewActivity, DEFAULT_ACTIVITY_STATUS};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

const UNKNOWN_PROCESS: &str = "The given process does not exist.";
const UNKNOWN_ASSIGNEE: &str = "The assigned user does not exist.";

impl PlatformStore {
    pub fn list_activities(&self, filter: &ActivityFilter) -> Vec<Activity> {
        self
            .activities
            .values()
            .filter(|a| a.matches(filter))
            .cloned()
            .collect()
    }

    pub fn find_activity(&self, id: &str) -> Option<&Activity> {
        self.activities.get(id)
    }

    pub fn get_activity(&self, id: &str) -> Result<Activity> {
        self
            .find_activity(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("Activity", id))
    }

    pub fn create_activity(&mut self, process_id: &str, payload: NewActivity) -> Result<Activity> {
        if process_id.trim().is_empty() {
            return Err(PlatformError::validation("Activity process is required."));
        }
        if !self.process_exists(process_id) {
            return Err(PlatformError::validation(UNKNOWN_PROCESS));
        }
        let title = require_text(payload.title, "Activity title is required.")?;
        let assigned_to = non_blank(payload.assigned_to);
        if let Some(ref user_id) = assigned_to {
            if !self.user_exists(user_id) {
                return Err(PlatformError::validation(UNKNOWN_ASSIGNEE));
            }
        }

        let now = Utc::now();
        let activity = Activity {
            id: self.sequence.next(prefix::ACTIVITY),
            process_id: process_id.to_string(),
            title,
            description: payload.description.unwrap_or_default(),
            assigned_to,
            due_date: payload.due_date,
            status: DEFAULT_ACTIVITY_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };

        info!(activity_id = %activity.id, process_id = %activity.process_id, "Activity created");
        self.activities.insert(activity.id.clone(), activity.clone());
        Ok(activity)
    }

    pub fn update_activity(&mut self, id: &str, patch: ActivityPatch) -> Result<Activity> {
        let patch = ActivityPatch {
            assigned_to: blank_as_clear(patch.assigned_to),
            ..patch
        };
        let current = self
            .find_activity(id)
            .ok_or_else(|| PlatformError::not_found("Activity", id))?;
        reject_blank(patch.title.as_ref(), "Activity title is required.")?;
        reject_blank(patch.status.as_ref(), "Activity status is required.")?;
        if let Some(ref process_id) = patch.process_id {
            if !self.process_exists(process_id) {
                return Err(PlatformError::validation(UNKNOWN_PROCESS));
            }
        }
        if let Some(Some(ref user_id)) = patch.assigned_to {
            if !self.user_exists(user_id) {
                return Err(PlatformError::validation(UNKNOWN_ASSIGNEE));
            }
        }

        let updated = current.apply(patch, Utc::now());

        debug!(activity_id = %id, status = %updated.status, "Activity updated");
        self.activities.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    /// Activities have no dependents and can always be deleted.
    pub fn delete_activity(&mut self, id: &str) -> Result<Activity> {
        let activity = self
            .activities
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("Activity", id))?;
        info!(activity_id = %id, "Activity deleted");
        Ok(activity)
    }
}
