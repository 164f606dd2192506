//! Development Data Seeder
//!
//! Fills an empty store with a minimal organisation and one approval
//! workflow so the API can be explored right after startup. Everything goes
//! through the regular store operations.

use tracing::info;

use crate::domain::{NewBranch, NewSector, NewUser, NewWorkflow};
use crate::error::Result;
use crate::store::SharedStore;

pub const SEED_BRANCH_NAME: &str = "Headquarters";
pub const SEED_SECTOR_NAME: &str = "Quality";
pub const SEED_ADMIN_EMAIL: &str = "admin@qualiflow.local";
pub const SEED_WORKFLOW_NAME: &str = "Document approval";

pub struct DevDataSeeder {
    store: SharedStore,
}

impl DevDataSeeder {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Seed the store. Does nothing if any branch already exists.
    pub fn seed(&self) -> Result<()> {
        let mut store = self.store.write();
        if !store.list_branches().is_empty() {
            info!("Store already has data, skipping dev seed");
            return Ok(());
        }

        let branch = store.create_branch(
            NewBranch::new(SEED_BRANCH_NAME).with_description("Main office"),
        )?;
        let sector = store.create_sector(NewSector::new(SEED_SECTOR_NAME, &branch.id))?;
        let admin = store.create_user(
            NewUser::new("Administrator", SEED_ADMIN_EMAIL).with_role("admin"),
        )?;
        let workflow = store.create_workflow(
            NewWorkflow::new(SEED_WORKFLOW_NAME).with_steps(["Review", "Approval"]),
        )?;

        info!(
            branch_id = %branch.id,
            sector_id = %sector.id,
            user_id = %admin.id,
            workflow_id = %workflow.id,
            "Dev data seeded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PlatformStore;

    #[test]
    fn test_seed_creates_sample_data() {
        let store = PlatformStore::shared();
        DevDataSeeder::new(store.clone()).seed().unwrap();

        let store = store.read();
        assert_eq!(store.get_branch("branch-1").unwrap().name, SEED_BRANCH_NAME);
        assert_eq!(store.get_sector("sector-1").unwrap().branch_id, "branch-1");
        assert_eq!(store.get_user("user-1").unwrap().role, "admin");
        assert_eq!(store.get_workflow("workflow-1").unwrap().steps.len(), 2);
    }

    #[test]
    fn test_seed_is_skipped_on_existing_data() {
        let store = PlatformStore::shared();
        let seeder = DevDataSeeder::new(store.clone());
        seeder.seed().unwrap();
        seeder.seed().unwrap();

        assert_eq!(store.read().list_branches().len(), 1);
        assert_eq!(store.read().list_workflows().len(), 1);
    }
}
