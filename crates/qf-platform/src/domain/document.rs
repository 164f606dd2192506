//! Document Entity
//!
//! Documents belong to a branch and optionally a sector. File attachments are
//! kept as an append-only list of versions embedded in the document.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// Notes recorded on the version created together with a document
pub const INITIAL_VERSION_NOTES: &str = "Initial version.";

/// One uploaded revision of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersion {
    pub id: String,
    /// 1-based position in the parent's version list
    pub version: u32,
    pub file_name: Option<String>,
    pub file_url: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: String,
    pub branch_id: String,
    pub sector_id: Option<String>,
    pub versions: Vec<DocumentVersion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Merge a patch into a copy of this document. Versions are always kept.
    pub fn apply(&self, patch: DocumentPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            branch_id: patch.branch_id.unwrap_or_else(|| self.branch_id.clone()),
            sector_id: match patch.sector_id {
                Some(sector_id) => sector_id,
                None => self.sector_id.clone(),
            },
            versions: self.versions.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn next_version_number(&self) -> u32 {
        self.versions.len() as u32 + 1
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub branch_id: Option<String>,
    pub sector_id: Option<String>,
    /// When either file field is set an initial version is created
    pub file_name: Option<String>,
    pub file_url: Option<String>,
}

impl NewDocument {
    pub fn new(title: impl Into<String>, branch_id: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            branch_id: Some(branch_id.into()),
            ..Default::default()
        }
    }

    pub fn with_sector(mut self, sector_id: impl Into<String>) -> Self {
        self.sector_id = Some(sector_id.into());
        self
    }

    pub fn with_file(mut self, file_name: impl Into<String>, file_url: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self.file_url = Some(file_url.into());
        self
    }
}

/// Update document payload. `sectorId: null` detaches the sector.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub branch_id: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub sector_id: Option<Option<String>>,
}

/// Add version payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentVersion {
    pub file_name: Option<String>,
    pub file_url: Option<String>,
    pub notes: Option<String>,
}
