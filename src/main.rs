//! embedgen CLI - embed resource directories into C/C++ headers
//!
//! Usage: embedgen <COMMAND>
//!
//! Commands:
//!   generate  Render artifacts and write the headers
//!   check     Verify headers are up to date
//!   list      Show every embedded file with its index position

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use ui::json::{emit_event, events::ErrorEvent};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let (name, result) = match &cli.command {
        Commands::Generate { profile, dry_run } => (
            "generate",
            commands::cmd_generate(profile, *dry_run, cli.json),
        ),
        Commands::Check { profile, diff } => {
            ("check", commands::cmd_check(profile, *diff, cli.json))
        }
        Commands::List { profile } => ("list", commands::cmd_list(profile, cli.json)),
    };

    if let Err(err) = &result {
        if cli.json {
            let _ = emit_event(&ErrorEvent::new(name, format!("{:#}", err)));
        }
    }
    result
}
