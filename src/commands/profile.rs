//! Profile resolution shared by every command
//!
//! Priority: `--root` > `EMBEDGEN_*` > profile file or preset > defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use embedgen::config::{ConfigWarning, DEFAULT_PROFILE_FILE};
use embedgen::{Artifact, Profile, RenderOptions};

use crate::cli::ProfileArgs;

pub struct LoadedProfile {
    pub artifacts: Vec<Artifact>,
    pub render: RenderOptions,
    pub warnings: Vec<ConfigWarning>,
}

pub fn load(args: &ProfileArgs) -> Result<LoadedProfile> {
    let (profile, warnings) = match (args.preset, &args.config) {
        (Some(preset), _) => (preset.profile(), Vec::new()),
        (None, Some(path)) => Profile::load_with_warnings(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        (None, None) => {
            let path = PathBuf::from(DEFAULT_PROFILE_FILE);
            if !path.is_file() {
                bail!(
                    "no {} in {}; pass --config or --preset",
                    DEFAULT_PROFILE_FILE,
                    current_dir_display()
                );
            }
            Profile::load_with_warnings(&path)
                .with_context(|| format!("failed to load profile {}", path.display()))?
        }
    };

    let mut profile = profile.with_env_overrides();
    if let Some(root) = &args.root {
        profile = profile.with_root(root);
    }

    let artifacts = profile.resolve(&args.artifacts)?;
    if artifacts.is_empty() {
        bail!("profile defines no artifacts");
    }

    Ok(LoadedProfile {
        render: RenderOptions::from_profile(&profile),
        artifacts,
        warnings,
    })
}

fn current_dir_display() -> String {
    std::env::current_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|_| Path::new(".").display().to_string())
}
