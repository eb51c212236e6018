use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use embedgen::Preset;

/// embedgen - embed resource directories into C/C++ headers
#[derive(Parser, Debug)]
#[command(name = "embedgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the artifacts come from
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Profile file (defaults to ./embedgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in profile instead of a profile file
    #[arg(long, value_enum, conflicts_with = "config")]
    pub preset: Option<Preset>,

    /// Base directory for relative paths
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Only process these artifacts (repeatable)
    #[arg(short, long = "artifact")]
    pub artifacts: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render artifacts and write the headers
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Dry run - render and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify headers are up to date (exits non-zero when stale)
    Check {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print a unified diff for stale headers
        #[arg(long)]
        diff: bool,
    },

    /// Show every embedded file with its index position
    List {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}
