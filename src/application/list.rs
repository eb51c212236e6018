//! List Use Case
//!
//! Shows the positional index of every resource, i.e. which `Q[n]` a
//! downstream consumer gets for each file. Runs the same collision checks
//! as generation but only stats the files.

use std::path::PathBuf;

use crate::domain::entities::Artifact;
use crate::domain::ports::ResourceStore;
use crate::error::EmbedResult;

use super::options::RenderOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub index: usize,
    pub file_name: String,
    pub identifier: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListing {
    pub name: String,
    pub path: PathBuf,
    pub terminator: bool,
    pub entries: Vec<ListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactListing {
    pub name: String,
    pub output: PathBuf,
    pub groups: Vec<GroupListing>,
}

/// List use case - enumerate resources in index order
pub struct ListUseCase<S: ResourceStore> {
    store: S,
}

impl<S: ResourceStore> ListUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        artifacts: &[Artifact],
        options: &RenderOptions,
    ) -> EmbedResult<Vec<ArtifactListing>> {
        let embedder = options.embedder(&self.store);

        artifacts
            .iter()
            .map(|artifact| {
                let listed = embedder.list_unit(artifact.groups(), artifact.constants())?;
                let groups = artifact
                    .groups()
                    .iter()
                    .zip(listed)
                    .map(|(source, entries)| {
                        let entries = entries
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                Ok(ListingEntry {
                                    index,
                                    bytes: self.store.file_len(&entry.path)?,
                                    identifier: entry.identifier.to_string(),
                                    file_name: entry.file_name,
                                })
                            })
                            .collect::<EmbedResult<Vec<_>>>()?;
                        Ok(GroupListing {
                            name: source.name().to_string(),
                            path: source.path().to_path_buf(),
                            terminator: source.terminator(),
                            entries,
                        })
                    })
                    .collect::<EmbedResult<Vec<_>>>()?;

                Ok(ArtifactListing {
                    name: artifact.name().to_string(),
                    output: artifact.output().to_path_buf(),
                    groups,
                })
            })
            .collect()
    }
}
