use super::prompts::prompt_yes_no;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use mediadiary_core::Library;
use mediadiary_models::{Media, MediaKind};
use serde_json::json;
use std::io::IsTerminal;

pub fn run_remove(library: &mut Library, kind: MediaKind, id: u64, yes: bool, output: &Output) -> Result<()> {
    let item = library.get(kind, id).ok_or_else(|| eyre!("No {} with id {}", kind, id))?;

    if !yes && std::io::stdin().is_terminal() {
        let confirmed = prompt_yes_no(&format!("Remove {} '{}' (id {})?", kind, item.title(), id), Some(false))?;
        if !confirmed {
            output.info("Nothing removed.");
            return Ok(());
        }
    }

    let removed = library
        .remove(kind, id)
        .map_err(|e| eyre!("Failed to remove {} {}: {}", kind, id, e))?;
    if output.is_human() {
        output.success(format!("Removed {} '{}'", kind, removed.title()));
    } else {
        output.json(&json!({ "type": "removed", "item": removed }));
    }
    Ok(())
}
