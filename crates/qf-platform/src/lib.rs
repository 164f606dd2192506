//! QualiFlow Platform
//!
//! Core platform providing:
//! - Organisation structure (branches, sectors, users)
//! - Controlled documents with append-only versions
//! - Workflow templates and processes that step through them
//! - Activities attached to processes
//! - REST APIs over an in-memory entity store

pub mod domain;
pub mod store;
pub mod api;
pub mod error;
pub mod sequence;
pub mod seed;

pub use domain::*;
pub use error::PlatformError;
pub use sequence::SequenceGenerator;
pub use store::{PlatformStore, SharedStore};
