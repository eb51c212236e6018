//! Check command implementation

use anyhow::Result;

use embedgen::{CheckUseCase, Freshness, LocalFs};

use crate::cli::ProfileArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CheckEvent, CompleteEvent, StartEvent, WarningEvent};

const COMMAND: &str = "check";

pub fn cmd_check(args: &ProfileArgs, diff: bool, json: bool) -> Result<()> {
    let loaded = super::profile::load(args)?;

    if json {
        emit_event(&StartEvent::new(COMMAND, loaded.artifacts.len()))?;
        for warning in &loaded.warnings {
            emit_event(&WarningEvent::new(COMMAND, warning.to_string()))?;
        }
    }

    let result = CheckUseCase::new(LocalFs::new()).execute(&loaded.artifacts, &loaded.render)?;

    if json {
        for check in &result.artifacts {
            emit_event(&CheckEvent::from(check))?;
        }
        let complete = if result.is_fresh() {
            CompleteEvent::success(COMMAND)
        } else {
            CompleteEvent::failure(COMMAND)
        };
        emit_event(&complete)?;
    } else {
        for check in &result.artifacts {
            println!("{:<8} {} ({})", check.status, check.name, check.output.display());
            if diff {
                if let Some(text) = check.diff() {
                    print!("{}", text);
                }
            }
        }
        println!();
        println!(
            "Result: {} fresh, {} stale, {} missing",
            result.count(Freshness::Fresh),
            result.count(Freshness::Stale),
            result.count(Freshness::Missing)
        );
    }

    if !result.is_fresh() {
        if !json {
            println!("Headers are out of date - run 'embedgen generate'");
        }
        std::process::exit(1);
    }

    Ok(())
}
