//! Generate Use Case
//!
//! Renders each artifact and replaces its output file atomically.
//!
//! ## Flow
//!
//! 1. Render the full unit in memory (any read failure aborts here)
//! 2. Cross-check counting constants against group sizes (warnings only)
//! 3. Write the unit atomically, unless this is a dry run

use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::entities::{Artifact, CountMismatch, GroupSummary};
use crate::domain::ports::ResourceStore;
use crate::domain::value_objects::ContentHash;
use crate::error::EmbedResult;

use super::options::RenderOptions;

/// Options for the generate use case
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub render: RenderOptions,
    /// Render and report without touching the output files
    pub dry_run: bool,
}

/// What happened to one artifact
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    pub name: String,
    pub output: PathBuf,
    pub groups: Vec<GroupSummary>,
    /// Size of the generated text
    pub bytes: usize,
    pub hash: ContentHash,
    pub mismatches: Vec<CountMismatch>,
    pub written: bool,
}

impl ArtifactReport {
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files).sum()
    }
}

/// Result of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    pub artifacts: Vec<ArtifactReport>,
}

impl GenerateResult {
    pub fn written(&self) -> usize {
        self.artifacts.iter().filter(|a| a.written).count()
    }

    pub fn warnings(&self) -> usize {
        self.artifacts.iter().map(|a| a.mismatches.len()).sum()
    }
}

/// Generate use case - render and write artifacts
pub struct GenerateUseCase<S: ResourceStore> {
    store: S,
}

impl<S: ResourceStore> GenerateUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Generate every artifact in order, stopping at the first failure.
    ///
    /// Artifacts already written stay written; the failing one is left
    /// exactly as it was.
    pub fn execute(
        &self,
        artifacts: &[Artifact],
        options: &GenerateOptions,
    ) -> EmbedResult<GenerateResult> {
        let mut result = GenerateResult::default();
        for artifact in artifacts {
            result.artifacts.push(self.generate_one(artifact, options)?);
        }
        Ok(result)
    }

    fn generate_one(
        &self,
        artifact: &Artifact,
        options: &GenerateOptions,
    ) -> EmbedResult<ArtifactReport> {
        let unit = options
            .render
            .embedder(&self.store)
            .render_artifact(artifact)?;

        let mismatches = unit.count_mismatches(artifact.constants());
        for mismatch in &mismatches {
            warn!(artifact = artifact.name(), "{}", mismatch);
        }

        let hash = unit.hash();
        let groups = unit.groups().to_vec();
        let content = unit.into_content();

        if !options.dry_run {
            self.store.write_atomic(artifact.output(), &content)?;
            info!(
                artifact = artifact.name(),
                output = %artifact.output().display(),
                bytes = content.len(),
                hash = %hash,
                "wrote artifact"
            );
        }

        Ok(ArtifactReport {
            name: artifact.name().to_string(),
            output: artifact.output().to_path_buf(),
            groups,
            bytes: content.len(),
            hash,
            mismatches,
            written: !options.dry_run,
        })
    }
}
