//! In-memory ResourceStore for unit tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::ResourceStore;
use crate::error::{EmbedError, EmbedResult};

#[derive(Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
    unreadable: HashSet<PathBuf>,
    unwritable: HashSet<PathBuf>,
    reads: usize,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<State>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, dir: impl Into<PathBuf>) {
        self.state.lock().unwrap().dirs.insert(dir.into());
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, bytes: &[u8]) {
        let path = path.into();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path, bytes.to_vec());
    }

    pub fn fail_read(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().unreadable.insert(path.into());
    }

    pub fn fail_write(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().unwritable.insert(path.into());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn read_count(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

impl ResourceStore for MockStore {
    fn list_files(&self, dir: &Path) -> EmbedResult<Vec<OsString>> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(dir) {
            return Err(EmbedError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        // HashMap order, like a real directory listing.
        Ok(state
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
            .collect())
    }

    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>> {
        let mut state = self.state.lock().unwrap();
        state.reads += 1;
        if state.unreadable.contains(path) {
            return Err(EmbedError::ResourceReadError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| EmbedError::ResourceReadError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
            })
    }

    fn file_len(&self, path: &Path) -> EmbedResult<u64> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(path)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| EmbedError::ResourceReadError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
            })
    }

    fn read_existing(&self, path: &Path) -> EmbedResult<Option<String>> {
        Ok(self.contents(path))
    }

    fn write_atomic(&self, path: &Path, content: &str) -> EmbedResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.unwritable.contains(path) {
            return Err(EmbedError::OutputWriteError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
        state.writes += 1;
        Ok(())
    }
}
