//! Domain Entities
//!
//! Core business objects with identity and lifecycle.

mod artifact;
mod resource;

pub use artifact::{Artifact, CountMismatch, GeneratedUnit, GroupSummary, HeaderConstant};
pub use resource::{ResourceEntry, ResourceFile, SourceDirectory};
