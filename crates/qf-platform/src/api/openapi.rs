//! OpenAPI Documentation
//!
//! Central OpenAPI specification for the platform APIs, served as JSON by
//! the server.

use utoipa::OpenApi;

use crate::domain::{
    Activity, ActivityPatch, AdvanceProcess, Branch, BranchPatch, Document, DocumentPatch,
    DocumentVersion, HistoryEntry, NewActivity, NewBranch, NewDocument, NewDocumentVersion,
    NewProcess, NewSector, NewUser, NewWorkflow, Process, ProcessPatch, ProcessStatus, Sector,
    SectorPatch, StepInput, User, UserPatch, Workflow, WorkflowPatch, WorkflowStep,
};

use super::common::{ApiError, ErrorBody};

/// Platform API OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "QualiFlow Platform API",
        version = "1.0.0",
        description = "Quality management: organisation, documents, workflows and processes"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development")
    ),
    tags(
        (name = "branches", description = "Company branches"),
        (name = "sectors", description = "Sectors within a branch"),
        (name = "users", description = "User management"),
        (name = "documents", description = "Controlled documents and their versions"),
        (name = "workflows", description = "Workflow templates"),
        (name = "processes", description = "Running processes and their history"),
        (name = "activities", description = "Activities attached to processes")
    ),
    paths(
        super::branches::list_branches,
        super::branches::create_branch,
        super::branches::get_branch,
        super::branches::update_branch,
        super::branches::delete_branch,
        super::sectors::list_sectors,
        super::sectors::create_sector,
        super::sectors::get_sector,
        super::sectors::update_sector,
        super::sectors::delete_sector,
        super::users::list_users,
        super::users::create_user,
        super::users::get_user,
        super::users::update_user,
        super::users::delete_user,
        super::documents::list_documents,
        super::documents::create_document,
        super::documents::get_document,
        super::documents::update_document,
        super::documents::delete_document,
        super::documents::add_document_version,
        super::workflows::list_workflows,
        super::workflows::create_workflow,
        super::workflows::get_workflow,
        super::workflows::update_workflow,
        super::workflows::delete_workflow,
        super::processes::list_processes,
        super::processes::create_process,
        super::processes::get_process,
        super::processes::update_process,
        super::processes::delete_process,
        super::processes::advance_process,
        super::processes::process_history,
        super::processes::list_process_activities,
        super::processes::create_process_activity,
        super::activities::list_activities,
        super::activities::get_activity,
        super::activities::update_activity,
        super::activities::delete_activity,
    ),
    components(schemas(
        ApiError, ErrorBody,
        Branch, NewBranch, BranchPatch,
        Sector, NewSector, SectorPatch,
        User, NewUser, UserPatch,
        Document, DocumentVersion, NewDocument, DocumentPatch, NewDocumentVersion,
        Workflow, WorkflowStep, StepInput, NewWorkflow, WorkflowPatch,
        Process, ProcessStatus, HistoryEntry, NewProcess, ProcessPatch, AdvanceProcess,
        Activity, NewActivity, ActivityPatch,
    ))
)]
pub struct PlatformApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = PlatformApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/branches"));
        assert!(paths.contains_key("/api/processes/{id}/advance"));
        assert!(paths.contains_key("/api/activities/{id}"));
    }
}
