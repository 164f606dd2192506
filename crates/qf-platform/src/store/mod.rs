//! Entity Store
//!
//! In-memory store owning every entity map. Each operation validates first
//! and only then writes a complete replacement record, so a failed call leaves
//! no trace. Maps keep insertion order, which is the order `list_*` returns.
//!
//! The store itself is not synchronised. Servers share it as a [`SharedStore`],
//! taking the write lock for the whole validate-then-commit sequence of a
//! mutation.

mod branches;
mod sectors;
mod users;
mod documents;
mod workflows;
mod processes;
mod activities;

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::{Activity, Branch, Document, Process, Sector, User, Workflow};
use crate::error::{PlatformError, Result};
use crate::sequence::SequenceGenerator;

/// Store handle shared across request handlers
pub type SharedStore = Arc<RwLock<PlatformStore>>;

#[derive(Debug, Default)]
pub struct PlatformStore {
    branches: IndexMap<String, Branch>,
    sectors: IndexMap<String, Sector>,
    users: IndexMap<String, User>,
    documents: IndexMap<String, Document>,
    workflows: IndexMap<String, Workflow>,
    processes: IndexMap<String, Process>,
    activities: IndexMap<String, Activity>,
    sequence: SequenceGenerator,
}

impl PlatformStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store for sharing between handlers.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }
}

/// Take a required text field from a create payload.
fn require_text(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlatformError::validation(message)),
    }
}

/// A required text field supplied in a patch must not be blank.
fn reject_blank(value: Option<&String>, message: &str) -> Result<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(PlatformError::validation(message)),
        _ => Ok(()),
    }
}

/// Treat blank optional references as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A blank optional reference in a patch clears the field, like `null`.
fn blank_as_clear(value: Option<Option<String>>) -> Option<Option<String>> {
    value.map(non_blank)
}
