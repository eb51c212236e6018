//! ResourceStore port - abstraction over the file I/O the generator needs
//!
//! The embedder only lists directories and reads bytes; the use cases
//! additionally read the previous artifact and replace it atomically.
//!
//! Implementations:
//! - `LocalFs` - standard file I/O with temp-file + rename writes
//! - `MockStore` - in-memory, for unit tests

use std::ffi::OsString;
use std::path::Path;

use crate::error::EmbedResult;

/// Abstract resource store interface
pub trait ResourceStore {
    /// Names of the regular files directly inside `dir`, in no particular order.
    ///
    /// Fails with `DirectoryNotFound` when `dir` is missing or not a directory,
    /// and with `ResourceReadError` when it cannot be listed.
    fn list_files(&self, dir: &Path) -> EmbedResult<Vec<OsString>>;

    /// Full content of one resource. Fails with `ResourceReadError`.
    fn read_bytes(&self, path: &Path) -> EmbedResult<Vec<u8>>;

    /// Size of one resource in bytes, without reading it.
    fn file_len(&self, path: &Path) -> EmbedResult<u64>;

    /// Current content of a previously generated artifact, `None` if absent.
    fn read_existing(&self, path: &Path) -> EmbedResult<Option<String>>;

    /// Replace `path` with `content` so readers never observe a partial file.
    /// Fails with `OutputWriteError`.
    fn write_atomic(&self, path: &Path, content: &str) -> EmbedResult<()>;
}
