use crate::output::Output;
use color_eyre::Result;
use mediadiary_core::Library;
use mediadiary_models::{Media, MediaKind};

pub fn run_search(library: &Library, criteria: &str, kind: Option<MediaKind>, output: &Output) -> Result<()> {
    let mut results = library.search_all(criteria);
    if let Some(kind) = kind {
        results.retain(|item| item.kind() == kind);
    }

    if results.is_empty() && output.is_human() {
        output.warn(format!("Nothing matches '{}'", criteria.trim()));
        return Ok(());
    }

    output.media_list(&results);
    Ok(())
}
