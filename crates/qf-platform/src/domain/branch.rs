//! Branch Entity
//!
//! A physical or organizational unit. Sectors and documents hang off a branch.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Branch {
    /// Merge a patch into a copy of this branch.
    pub fn apply(&self, patch: BranchPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// Create branch payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBranch {
    /// Branch name (required)
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewBranch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Update branch payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch() -> Branch {
        let now = Utc::now();
        Branch {
            id: "branch-1".to_string(),
            name: "HQ".to_string(),
            description: "Head office".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_patch_only_touches_updated_at() {
        let original = branch();
        let later = original.updated_at + chrono::Duration::seconds(5);
        let patched = original.apply(BranchPatch::default(), later);

        assert_eq!(patched.name, original.name);
        assert_eq!(patched.description, original.description);
        assert_eq!(patched.created_at, original.created_at);
        assert_eq!(patched.updated_at, later);
    }

    #[test]
    fn test_patch_single_field() {
        let original = branch();
        let patch = BranchPatch { name: Some("Matriz".to_string()), ..Default::default() };
        let patched = original.apply(patch, Utc::now());

        assert_eq!(patched.name, "Matriz");
        assert_eq!(patched.description, "Head office");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(branch()).unwrap();
        assert_eq!(json["id"], "branch-1");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
