//! embedgen - embed directories of resource files into C/C++ headers
//!
//! Each regular file in a source directory becomes a `const uint8_t` array,
//! and every directory gets an aggregate `const char *` index addressing the
//! arrays by position. Headers are described by a profile (`embedgen.toml`)
//! or one of the built-in presets.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CheckUseCase, Freshness, GenerateOptions, GenerateUseCase, ListUseCase, RenderOptions,
};
pub use config::{Preset, Profile};
pub use domain::entities::{Artifact, GeneratedUnit, HeaderConstant, ResourceFile, SourceDirectory};
pub use domain::ports::ResourceStore;
pub use domain::services::{render_array, render_index, render_preamble, Embedder};
pub use domain::value_objects::{CollisionPolicy, ContentHash, Identifier};
pub use error::{EmbedError, EmbedResult};
pub use infrastructure::LocalFs;
