//! Collision Policy Value Object
//!
//! Decides what happens when two files in one group produce the same
//! generated identifier (`q1.sql` and `q1.txt`, or `a-b.csv` and `a_b.csv`).

use serde::Deserialize;

/// Collision handling for per-file identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort generation with `IdentifierCollision` (default)
    #[default]
    Error,
    /// Emit both declarations; the C compiler sees a duplicate definition
    Allow,
}

impl CollisionPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" | "fail" => Some(Self::Error),
            "allow" | "ignore" => Some(Self::Allow),
            _ => None,
        }
    }
}
