//! Profile configuration for embedgen
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (`--root`)
//! 2. Environment variables (EMBEDGEN_*)
//! 3. Profile file (`embedgen.toml`) or a built-in preset
//! 4. Built-in defaults

mod loader;
pub mod presets;
mod types;

pub use loader::{parse_with_warnings, ConfigWarning};
pub use presets::Preset;
pub use types::{ArtifactConfig, ConstantConfig, GroupConfig, Profile};

/// Profile file looked up in the working directory when none is given
pub const DEFAULT_PROFILE_FILE: &str = "embedgen.toml";
