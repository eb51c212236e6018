//! List command implementation

use anyhow::Result;

use embedgen::{ListUseCase, LocalFs};

use crate::cli::ProfileArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, EntryEvent, StartEvent};

const COMMAND: &str = "list";

pub fn cmd_list(args: &ProfileArgs, json: bool) -> Result<()> {
    let loaded = super::profile::load(args)?;
    let listings = ListUseCase::new(LocalFs::new()).execute(&loaded.artifacts, &loaded.render)?;

    if json {
        emit_event(&StartEvent::new(COMMAND, listings.len()))?;
        for listing in &listings {
            for group in &listing.groups {
                for entry in &group.entries {
                    emit_event(&EntryEvent::new(&listing.name, &group.name, entry))?;
                }
            }
        }
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    for listing in &listings {
        println!("{} ({})", listing.name, listing.output.display());
        for group in &listing.groups {
            let terminator = if group.terminator { "" } else { ", no terminator" };
            println!(
                "  {} ({}{}) - {} files",
                group.name,
                group.path.display(),
                terminator,
                group.entries.len()
            );
            for entry in &group.entries {
                println!(
                    "    [{}] {} -> {} ({} bytes)",
                    entry.index, entry.file_name, entry.identifier, entry.bytes
                );
            }
        }
    }

    Ok(())
}
