//! Domain Models
//!
//! Entity records, create payloads and typed patches.
//! All entities use sequence ids (`branch-1`, `process-3`, ...) and camelCase JSON.

pub mod branch;
pub mod sector;
pub mod user;
pub mod document;
pub mod workflow;
pub mod process;
pub mod activity;

pub use branch::*;
pub use sector::*;
pub use user::*;
pub use document::*;
pub use workflow::*;
pub use process::*;
pub use activity::*;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
///
/// Use together with `#[serde(default)]`.
pub(crate) fn deserialize_nullable<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
