use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{blank_as_clear, non_blank, require_text, reject_blank, PlatformStore};
use crate::domain::{
    Document, DocumentPatch, DocumentVersion, NewDocument, NewDocumentVersion,
    INITIAL_VERSION_NOTES,
};
use crate::error::{PlatformError, Result};
use crate::sequence::prefix;

const UNKNOWN_BRANCH: &str = "The given branch does not exist.";
const UNKNOWN_SECTOR: &str = "The given sector does not exist.";

impl PlatformStore {
    pub fn list_documents(&self) -> Vec<Document> {
        self.documents.values().cloned().collect()
    }

    pub fn find_document(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn get_document(&self, id: &str) -> Result<Document> {
        self
            .find_document(id)
            .cloned()
            .ok_or_else(|| PlatformError::not_found("Document", id))
    }

    pub fn document_exists(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Create a document. If a file name or url is given, version 1 is
    /// created with it in the same step.
    pub fn create_document(&mut self, payload: NewDocument) -> Result<Document> {
        let title = require_text(payload.title, "Document title is required.")?;
        let branch_id = require_text(payload.branch_id, "Document branch is required.")?;
        if !self.branch_exists(&branch_id) {
            return Err(PlatformError::validation(UNKNOWN_BRANCH));
        }
        let sector_id = non_blank(payload.sector_id);
        if let Some(ref sector_id) = sector_id {
            if !self.sector_exists(sector_id) {
                return Err(PlatformError::validation(UNKNOWN_SECTOR));
            }
        }

        let now = Utc::now();
        let file_name = non_blank(payload.file_name);
        let file_url = non_blank(payload.file_url);
        let versions = if file_name.is_some() || file_url.is_some() {
            vec![self.new_version(1, file_name, file_url, INITIAL_VERSION_NOTES.to_string(), now)]
        } else {
            Vec::new()
        };

        let document = Document {
            id: self.sequence.next(prefix::DOCUMENT),
            title,
            description: payload.description.unwrap_or_default(),
            branch_id,
            sector_id,
            versions,
            created_at: now,
            updated_at: now,
        };

        info!(
            document_id = %document.id,
            branch_id = %document.branch_id,
            versions = document.versions.len(),
            "Document created"
        );
        self.documents.insert(document.id.clone(), document.clone());
        Ok(document)
    }

    /// Append a version to a document and bump its `updated_at`.
    pub fn add_document_version(
        &mut self,
        document_id: &str,
        payload: NewDocumentVersion,
    ) -> Result<DocumentVersion> {
        let number = self
            .find_document(document_id)
            .ok_or_else(|| PlatformError::not_found("Document", document_id))?
            .next_version_number();

        let now = Utc::now();
        let version = self.new_version(
            number,
            non_blank(payload.file_name),
            non_blank(payload.file_url),
            payload.notes.unwrap_or_default(),
            now,
        );

        let document = self
            .documents
            .get_mut(document_id)
            .ok_or_else(|| PlatformError::not_found("Document", document_id))?;
        document.versions.push(version.clone());
        document.updated_at = now;

        info!(document_id = %document_id, version = version.version, "Document version added");
        Ok(version)
    }

    pub fn update_document(&mut self, id: &str, patch: DocumentPatch) -> Result<Document> {
        let patch = DocumentPatch {
            sector_id: blank_as_clear(patch.sector_id),
            ..patch
        };
        let current = self
            .find_document(id)
            .ok_or_else(|| PlatformError::not_found("Document", id))?;
        reject_blank(patch.title.as_ref(), "Document title is required.")?;
        if let Some(ref branch_id) = patch.branch_id {
            if !self.branch_exists(branch_id) {
                return Err(PlatformError::validation(UNKNOWN_BRANCH));
            }
        }
        if let Some(Some(ref sector_id)) = patch.sector_id {
            if !self.sector_exists(sector_id) {
                return Err(PlatformError::validation(UNKNOWN_SECTOR));
            }
        }

        let updated = current.apply(patch, Utc::now());

        debug!(document_id = %id, "Document updated");
        self.documents.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    pub fn delete_document(&mut self, id: &str) -> Result<Document> {
        if !self.document_exists(id) {
            return Err(PlatformError::not_found("Document", id));
        }

        if self.processes.values().any(|p| p.references_document(id)) {
            warn!(document_id = %id, "Document delete blocked by processes");
            return Err(PlatformError::conflict(
                "Documents linked to processes cannot be deleted.",
            ));
        }

        let document = self
            .documents
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("Document", id))?;
        info!(document_id = %id, "Document deleted");
        Ok(document)
    }

    fn new_version(
        &mut self,
        number: u32,
        file_name: Option<String>,
        file_url: Option<String>,
        notes: String,
        now: DateTime<Utc>,
    ) -> DocumentVersion {
        DocumentVersion {
            id: self.sequence.next(prefix::DOCUMENT_VERSION),
            version: number,
            file_name,
            file_url,
            notes,
            created_at: now,
        }
    }
}
