//! Local File System Implementation
//!
//! Implements the ResourceStore port for local disk operations.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::domain::ports::ResourceStore;
use crate::error::{EmbedError, EmbedResult};

/// Local file system implementation
///
/// Provides flat directory listing and atomic writes (tempfile + rename in
/// the destination directory).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl ResourceStore for LocalFs {
    fn list_files(&self, dir: &Path) -> EmbedResult<Vec<OsString>> {
        if !dir.is_dir() {
            return Err(EmbedError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let read_err = |source| EmbedError::ResourceReadError {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();

            // Follows symlinks; a dangling link is an unreadable resource.
            let meta = fs::metadata(&path).map_err(|source| EmbedError::ResourceReadError {
                path: path.clone(),
                source,
            })?;

            if meta.is_file() {
                names.push(entry.file_name());
            } else {
                warn!(path = %path.display(), "skipping non-file entry");
            }
        }

        trace!(dir = %dir.display(), files = names.len(), "listed directory");
        Ok(names)
    }

    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>> {
        fs::read(path).map_err(|source| EmbedError::ResourceReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn file_len(&self, path: &Path) -> EmbedResult<u64> {
        fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|source| EmbedError::ResourceReadError {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read_existing(&self, path: &Path) -> EmbedResult<Option<String>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EmbedError::ResourceReadError {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write_atomic(&self, path: &Path, content: &str) -> EmbedResult<()> {
        atomic_write(path, content.as_bytes()).map_err(|source| EmbedError::OutputWriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Write content to a file atomically
///
/// The temp file lives in the destination directory so the final rename
/// never crosses file systems. On failure the previous file is untouched.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".embedgen-")
        .suffix(".tmp")
        .tempfile_in(&parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    // tempfile creates 0600 files; keep what the artifact had, or the
    // usual default for a fresh one.
    match fs::metadata(path) {
        Ok(existing) => fs::set_permissions(tmp.path(), existing.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => set_default_permissions(tmp.path())?,
        Err(e) => return Err(e),
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
