//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain rendering rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Render artifacts and write them atomically
//! - `CheckUseCase` - Compare rendered artifacts with what is on disk
//! - `ListUseCase` - Show the positional index of every resource

pub mod check;
pub mod generate;
pub mod list;
mod options;

pub use check::{ArtifactCheck, CheckResult, CheckUseCase, Freshness};
pub use generate::{ArtifactReport, GenerateOptions, GenerateResult, GenerateUseCase};
pub use list::{ArtifactListing, GroupListing, ListUseCase, ListingEntry};
pub use options::RenderOptions;
