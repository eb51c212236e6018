//! Profile type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{Artifact, HeaderConstant, SourceDirectory};
use crate::domain::services::DEFAULT_GENERATOR;
use crate::domain::value_objects::{CollisionPolicy, Identifier};
use crate::error::{EmbedError, EmbedResult};

use super::loader::{self, ConfigWarning};

/// A set of artifacts to generate
///
/// ```toml
/// generated_by = "generate_csv_header.py"
///
/// [[artifact]]
/// name = "tpch"
/// output = "extension/tpch/dbgen/include/tpch_constants.hpp"
///
/// [[artifact.constant]]
/// name = "TPCH_QUERIES_COUNT"
/// value = 22
/// counts = "TPCH_QUERIES"
///
/// [[artifact.group]]
/// name = "TPCH_QUERIES"
/// path = "extension/tpch/dbgen/queries"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    /// Name written into the provenance comment
    #[serde(default = "default_generated_by")]
    pub generated_by: String,

    #[serde(default)]
    pub on_collision: CollisionPolicy,

    #[serde(default, rename = "artifact")]
    pub artifacts: Vec<ArtifactConfig>,

    /// Base directory for relative paths (the profile file's directory)
    #[serde(skip)]
    pub root: PathBuf,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            generated_by: default_generated_by(),
            on_collision: CollisionPolicy::default(),
            artifacts: Vec::new(),
            root: PathBuf::from("."),
        }
    }
}

/// One generated header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactConfig {
    pub name: String,

    /// Destination path, relative to the profile root
    pub output: PathBuf,

    #[serde(default, rename = "constant")]
    pub constants: Vec<ConstantConfig>,

    #[serde(default, rename = "group")]
    pub groups: Vec<GroupConfig>,
}

/// `const int` declaration in the header preamble
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConstantConfig {
    pub name: String,
    pub value: i32,

    /// Group whose file count should equal `value`
    #[serde(default)]
    pub counts: Option<String>,
}

/// Directory embedded as one group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub path: PathBuf,

    #[serde(default = "default_true")]
    pub terminator: bool,
}

fn default_generated_by() -> String {
    DEFAULT_GENERATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn load(path: &Path) -> EmbedResult<Self> {
        let (profile, _warnings) = loader::load_with_warnings(path)?;
        Ok(profile)
    }

    /// Load a profile and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> EmbedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `EMBEDGEN_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn artifact_names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.name.as_str()).collect()
    }

    /// Validate and resolve artifacts into domain entities.
    ///
    /// An empty `selected` list means every artifact. Selecting a name the
    /// profile does not define fails with `UnknownArtifact`.
    pub fn resolve(&self, selected: &[String]) -> EmbedResult<Vec<Artifact>> {
        if let Some(missing) = selected
            .iter()
            .find(|name| !self.artifacts.iter().any(|a| &a.name == *name))
        {
            return Err(EmbedError::UnknownArtifact {
                name: missing.clone(),
            });
        }

        self.artifacts
            .iter()
            .filter(|a| selected.is_empty() || selected.contains(&a.name))
            .map(|a| a.resolve(&self.root))
            .collect()
    }
}

impl ArtifactConfig {
    fn resolve(&self, root: &Path) -> EmbedResult<Artifact> {
        let constants = self
            .constants
            .iter()
            .map(|c| {
                Ok(HeaderConstant {
                    name: identifier(&c.name)?,
                    value: c.value,
                    counts: c.counts.clone(),
                })
            })
            .collect::<EmbedResult<Vec<_>>>()?;

        let groups = self
            .groups
            .iter()
            .map(|g| {
                Ok(SourceDirectory::new(
                    identifier(&g.name)?,
                    root.join(&g.path),
                    g.terminator,
                ))
            })
            .collect::<EmbedResult<Vec<_>>>()?;

        Ok(Artifact::new(
            self.name.clone(),
            root.join(&self.output),
            constants,
            groups,
        ))
    }
}

fn identifier(name: &str) -> EmbedResult<Identifier> {
    Identifier::new(name).map_err(|reason| EmbedError::InvalidIdentifier {
        name: name.to_string(),
        reason,
    })
}
