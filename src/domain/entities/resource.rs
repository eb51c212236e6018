//! Resource entities - source directories and the files inside them

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Identifier;

/// A flat directory whose regular files become one group of arrays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirectory {
    /// Group name, used as the aggregate array name and identifier prefix
    name: Identifier,
    /// Directory holding the resources
    path: PathBuf,
    /// Append a trailing zero byte to every array
    terminator: bool,
}

impl SourceDirectory {
    pub fn new(name: Identifier, path: impl Into<PathBuf>, terminator: bool) -> Self {
        Self {
            name,
            path: path.into(),
            terminator,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn terminator(&self) -> bool {
        self.terminator
    }
}

/// A file of a source directory in index order, before its bytes are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub file_name: String,
    pub identifier: Identifier,
    pub path: PathBuf,
}

/// One file read from a source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    file_name: String,
    identifier: Identifier,
    bytes: Vec<u8>,
}

impl ResourceFile {
    pub fn new(file_name: impl Into<String>, identifier: Identifier, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            identifier,
            bytes,
        }
    }

    /// File name including its extension
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Generated array name (`{group}_{stem}`)
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
