//! Artifact entities
//!
//! An `Artifact` describes one generated header: where it goes, which
//! constants it declares and which directories it embeds. A
//! `GeneratedUnit` is the rendered result.

use std::path::{Path, PathBuf};

use crate::domain::entities::SourceDirectory;
use crate::domain::value_objects::{ContentHash, Identifier};

/// A `const int NAME = value;` line in the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConstant {
    pub name: Identifier,
    pub value: i32,
    /// Group whose file count this constant is expected to match
    pub counts: Option<String>,
}

impl HeaderConstant {
    pub fn new(name: Identifier, value: i32) -> Self {
        Self {
            name,
            value,
            counts: None,
        }
    }

    pub fn counting(mut self, group: impl Into<String>) -> Self {
        self.counts = Some(group.into());
        self
    }
}

/// One generated header and everything that goes into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    output: PathBuf,
    constants: Vec<HeaderConstant>,
    groups: Vec<SourceDirectory>,
}

impl Artifact {
    pub fn new(
        name: impl Into<String>,
        output: impl Into<PathBuf>,
        constants: Vec<HeaderConstant>,
        groups: Vec<SourceDirectory>,
    ) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            constants,
            groups,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn constants(&self) -> &[HeaderConstant] {
        &self.constants
    }

    pub fn groups(&self) -> &[SourceDirectory] {
        &self.groups
    }
}

/// Size of one rendered group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub files: usize,
    pub bytes: usize,
}

/// A constant whose value disagrees with the group it counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMismatch {
    pub constant: String,
    pub group: String,
    pub expected: i32,
    /// `None` when the named group is not part of the artifact
    pub actual: Option<usize>,
}

impl std::fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "{} = {} but group {} has {} files",
                self.constant, self.expected, self.group, actual
            ),
            None => write!(
                f,
                "{} counts group {} which is not part of this artifact",
                self.constant, self.group
            ),
        }
    }
}

/// Rendered text of one artifact plus what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    content: String,
    groups: Vec<GroupSummary>,
}

impl GeneratedUnit {
    pub fn new(content: String, groups: Vec<GroupSummary>) -> Self {
        Self { content, groups }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    pub fn groups(&self) -> &[GroupSummary] {
        &self.groups
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }

    /// Total number of embedded files across all groups
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files).sum()
    }

    /// Compare every counting constant with the group it describes.
    pub fn count_mismatches(&self, constants: &[HeaderConstant]) -> Vec<CountMismatch> {
        constants
            .iter()
            .filter_map(|constant| {
                let group = constant.counts.as_ref()?;
                let actual = self
                    .groups
                    .iter()
                    .find(|g| &g.name == group)
                    .map(|g| g.files);

                let matches = actual.is_some_and(|n| i32::try_from(n) == Ok(constant.value));
                (!matches).then(|| CountMismatch {
                    constant: constant.name.to_string(),
                    group: group.clone(),
                    expected: constant.value,
                    actual,
                })
            })
            .collect()
    }
}
