use chrono::Utc;
use tracing::{debug, info, warn};

use super::{require_text, reject_blank, PlatformStore};
use crate::domain::{NewUser, User, UserPatch, DEFAULT_USER_ROLE};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

impl PlatformStore {
    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_user(&self, id: &str) -> Result<User> {
        self
            .find_user(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("User", id))
    }

    pub fn user_exists(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn create_user(&mut self, payload: NewUser) -> Result<User> {
        let name = require_text(payload.name, "User name is required.")?;
        let email = require_text(payload.email, "User email is required.")?;
        let role = payload
            .role
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_ROLE.to_string());

        let now = Utc::now();
        let user = User {
            id: self.sequence.next(prefix::USER),
            name,
            email,
            role,
            created_at: now,
            updated_at: now,
        };

        info!(user_id = %user.id, role = %user.role, "User created");
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Result<User> {
        let current = self
            .find_user(id)
            .ok_or_else(|| PlatformError::not_found("User", id))?;
        reject_blank(patch.name.as_ref(), "User name is required.")?;
        reject_blank(patch.email.as_ref(), "User email is required.")?;

        let updated = current.apply(patch, Utc::now());

        debug!(user_id = %id, "User updated");
        self.users.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    pub fn delete_user(&mut self, id: &str) -> Result<User> {
        if !self.user_exists(id) {
            return Err(PlatformError::not_found("User", id));
        }

        if self.activities.values().any(|a| a.assigned_to.as_deref() == Some(id)) {
            warn!(user_id = %id, "User delete blocked by activities");
            return Err(PlatformError::conflict(
                "Users assigned to activities cannot be deleted.",
            ));
        }

        let user = self
            .users
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("User", id))?;
        info!(user_id = %id, "User deleted");
        Ok(user)
    }
}
