//! Profile loading and environment overrides

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::CollisionPolicy;
use crate::error::{EmbedError, EmbedResult};

use super::types::Profile;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a profile and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the profile resolve against the file's directory.
pub fn load_with_warnings(path: &Path) -> EmbedResult<(Profile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| EmbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (mut profile, warnings) = parse_with_warnings(&content, path)?;

    profile.root = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok((profile, warnings))
}

/// Parse profile text; `file` is only used for diagnostics.
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> EmbedResult<(Profile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let profile: Profile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmbedError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: file.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((profile, warnings))
}

/// Apply environment variable overrides (EMBEDGEN_* prefix)
pub fn with_env_overrides(profile: Profile) -> Profile {
    apply_overrides(profile, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(
    mut profile: Profile,
    lookup: impl Fn(&str) -> Option<String>,
) -> Profile {
    // EMBEDGEN_ROOT
    if let Some(root) = lookup("EMBEDGEN_ROOT").filter(|r| !r.is_empty()) {
        profile.root = PathBuf::from(root);
    }

    // EMBEDGEN_ON_COLLISION
    if let Some(value) = lookup("EMBEDGEN_ON_COLLISION") {
        match CollisionPolicy::parse(&value) {
            Some(policy) => profile.on_collision = policy,
            None => warn!(value = %value, "ignoring unrecognized EMBEDGEN_ON_COLLISION"),
        }
    }

    // EMBEDGEN_GENERATED_BY
    if let Some(name) = lookup("EMBEDGEN_GENERATED_BY").filter(|n| !n.is_empty()) {
        profile.generated_by = name;
    }

    profile
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generated_by",
        "on_collision",
        "artifact",
        "name",
        "output",
        "constant",
        "value",
        "counts",
        "group",
        "path",
        "terminator",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("group", "group"), 0);
        assert_eq!(levenshtein("grup", "group"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn suggest_close_key() {
        assert_eq!(suggest_key("terminater"), Some("terminator".to_string()));
        assert_eq!(suggest_key("outptu"), Some("output".to_string()));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn find_line_is_one_based() {
        let content = "a = 1\nb = 2\n";
        assert_eq!(find_line_number(content, "b"), Some(2));
        assert_eq!(find_line_number(content, "zzz"), None);
    }

    #[test]
    fn warning_display_includes_suggestion() {
        let warning = ConfigWarning {
            key: "termintor".to_string(),
            file: PathBuf::from("embedgen.toml"),
            line: Some(7),
            suggestion: Some("terminator".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown key 'termintor' in embedgen.toml:7 (did you mean 'terminator'?)"
        );
    }
}
