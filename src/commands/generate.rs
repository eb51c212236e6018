//! Generate command implementation

use std::time::Instant;

use anyhow::Result;

use embedgen::{GenerateOptions, GenerateUseCase, LocalFs};

use crate::cli::ProfileArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ArtifactEvent, CompleteEvent, StartEvent, WarningEvent};

const COMMAND: &str = "generate";

pub fn cmd_generate(args: &ProfileArgs, dry_run: bool, json: bool) -> Result<()> {
    let started = Instant::now();
    let loaded = super::profile::load(args)?;

    if json {
        emit_event(&StartEvent::new(COMMAND, loaded.artifacts.len()))?;
        for warning in &loaded.warnings {
            emit_event(&WarningEvent::new(COMMAND, warning.to_string()))?;
        }
    }

    let options = GenerateOptions {
        render: loaded.render,
        dry_run,
    };
    let result = GenerateUseCase::new(LocalFs::new()).execute(&loaded.artifacts, &options)?;

    if json {
        for report in &result.artifacts {
            for mismatch in &report.mismatches {
                emit_event(&WarningEvent::new(COMMAND, mismatch.to_string()))?;
            }
            emit_event(&ArtifactEvent::from(report))?;
        }
        let elapsed = started.elapsed().as_millis() as u64;
        emit_event(&CompleteEvent::success(COMMAND).with_duration(elapsed))?;
        return Ok(());
    }

    for report in &result.artifacts {
        let verb = if report.written { "Generated" } else { "Would write" };
        println!(
            "{} {} -> {} ({} groups, {} files, {} bytes)",
            verb,
            report.name,
            report.output.display(),
            report.groups.len(),
            report.file_count(),
            report.bytes
        );
    }
    if dry_run {
        println!("Dry run: nothing written");
    }

    Ok(())
}
