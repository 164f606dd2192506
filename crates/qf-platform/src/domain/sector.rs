//! Sector Entity

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: String,
    pub name: String,
    /// Owning branch
    pub branch_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sector {
    pub fn apply(&self, patch: SectorPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            branch_id: patch.branch_id.unwrap_or_else(|| self.branch_id.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSector {
    pub name: Option<String>,
    pub branch_id: Option<String>,
}

impl NewSector {
    pub fn new(name: impl Into<String>, branch_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            branch_id: Some(branch_id.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectorPatch {
    pub name: Option<String>,
    /// Move the sector to another branch (must exist)
    pub branch_id: Option<String>,
}
