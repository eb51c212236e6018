//! Check Use Case
//!
//! Renders each artifact in memory and compares it with the file on disk.
//! Used in CI to catch headers that were not regenerated after a resource
//! changed.

use std::fmt;
use std::path::PathBuf;

use similar::TextDiff;
use tracing::debug;

use crate::domain::entities::Artifact;
use crate::domain::ports::ResourceStore;
use crate::domain::value_objects::ContentHash;
use crate::error::EmbedResult;

use super::options::RenderOptions;

/// Freshness of one artifact on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// On-disk content equals the rendered content
    Fresh,
    /// On-disk content differs
    Stale,
    /// Output file does not exist
    Missing,
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Freshness::Fresh => "fresh",
            Freshness::Stale => "stale",
            Freshness::Missing => "missing",
        })
    }
}

/// Check outcome for one artifact
#[derive(Debug, Clone)]
pub struct ArtifactCheck {
    pub name: String,
    pub output: PathBuf,
    pub status: Freshness,
    pub expected_hash: ContentHash,
    pub actual_hash: Option<ContentHash>,
    expected: String,
    actual: Option<String>,
}

impl ArtifactCheck {
    /// Unified diff from the on-disk file to the rendered content.
    ///
    /// `None` when the artifact is fresh.
    pub fn diff(&self) -> Option<String> {
        if self.status == Freshness::Fresh {
            return None;
        }
        let path = self.output.display().to_string();
        let actual = self.actual.as_deref().unwrap_or("");
        Some(
            TextDiff::from_lines(actual, &self.expected)
                .unified_diff()
                .header(&format!("a/{}", path), &format!("b/{}", path))
                .to_string(),
        )
    }
}

/// Result of a check run
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub artifacts: Vec<ArtifactCheck>,
}

impl CheckResult {
    pub fn is_fresh(&self) -> bool {
        self.artifacts.iter().all(|a| a.status == Freshness::Fresh)
    }

    pub fn count(&self, status: Freshness) -> usize {
        self.artifacts.iter().filter(|a| a.status == status).count()
    }
}

/// Check use case - compare rendered artifacts with what is on disk
pub struct CheckUseCase<S: ResourceStore> {
    store: S,
}

impl<S: ResourceStore> CheckUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        artifacts: &[Artifact],
        options: &RenderOptions,
    ) -> EmbedResult<CheckResult> {
        let embedder = options.embedder(&self.store);
        let mut result = CheckResult::default();

        for artifact in artifacts {
            let expected = embedder.render_artifact(artifact)?.into_content();
            let expected_hash = ContentHash::from_content(&expected);
            let actual = self.store.read_existing(artifact.output())?;
            let actual_hash = actual.as_deref().map(ContentHash::from_content);

            let status = match &actual_hash {
                None => Freshness::Missing,
                Some(hash) if hash.matches(&expected_hash) => Freshness::Fresh,
                Some(_) => Freshness::Stale,
            };
            debug!(artifact = artifact.name(), status = %status, "checked artifact");

            result.artifacts.push(ArtifactCheck {
                name: artifact.name().to_string(),
                output: artifact.output().to_path_buf(),
                status,
                expected_hash,
                actual_hash,
                expected,
                actual,
            });
        }

        Ok(result)
    }
}
