//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits `start`, then its data events, then `complete`
//! (or `error`).

use serde::Serialize;

use embedgen::application::{ArtifactCheck, ArtifactReport, ListingEntry};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub artifacts: usize,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, artifacts: usize) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            artifacts,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// Non-fatal problem (unknown profile key, count mismatch)
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// One generated (or dry-run rendered) header.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEvent<'a> {
    pub event: &'static str,
    pub artifact: &'a str,
    pub output: String,
    pub files: usize,
    pub bytes: usize,
    pub hash: &'a str,
    pub written: bool,
}

impl<'a> From<&'a ArtifactReport> for ArtifactEvent<'a> {
    fn from(report: &'a ArtifactReport) -> Self {
        Self {
            event: "artifact",
            artifact: &report.name,
            output: report.output.display().to_string(),
            files: report.file_count(),
            bytes: report.bytes,
            hash: report.hash.as_str(),
            written: report.written,
        }
    }
}

/// Freshness of one header.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub artifact: &'a str,
    pub output: String,
    pub status: String,
    pub expected: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<&'a str>,
}

impl<'a> From<&'a ArtifactCheck> for CheckEvent<'a> {
    fn from(check: &'a ArtifactCheck) -> Self {
        Self {
            event: "check",
            artifact: &check.name,
            output: check.output.display().to_string(),
            status: check.status.to_string(),
            expected: check.expected_hash.as_str(),
            actual: check.actual_hash.as_ref().map(|h| h.as_str()),
        }
    }
}

/// One embedded file at its index position.
#[derive(Debug, Clone, Serialize)]
pub struct EntryEvent<'a> {
    pub event: &'static str,
    pub artifact: &'a str,
    pub group: &'a str,
    pub index: usize,
    pub file: &'a str,
    pub identifier: &'a str,
    pub bytes: u64,
}

impl<'a> EntryEvent<'a> {
    pub fn new(artifact: &'a str, group: &'a str, entry: &'a ListingEntry) -> Self {
        Self {
            event: "entry",
            artifact,
            group,
            index: entry.index,
            file: &entry.file_name,
            identifier: &entry.identifier,
            bytes: entry.bytes,
        }
    }
}
