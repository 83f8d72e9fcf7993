use super::entry::EntryArgs;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use mediadiary_core::{CatalogError, Library};
use mediadiary_models::MediaKind;
use serde_json::json;

/// Create an entry and return its id.
pub fn run_add(library: &mut Library, kind: MediaKind, fields: &EntryArgs, output: &Output) -> Result<u64> {
    fields.check_applies_to(kind)?;
    let title = fields.title.as_deref().ok_or_else(|| eyre!("--title is required"))?;
    if fields.year.is_none() {
        return Err(eyre!("--year is required"));
    }

    let added = match kind {
        MediaKind::Book => library.books_mut().add(fields.book_draft()),
        MediaKind::Movie => library.movies_mut().add(fields.movie_draft()),
        MediaKind::Series => library.series_mut().add(fields.series_draft()),
    };
    let id = match added {
        Ok(id) => id,
        // Kept in memory for this run only
        Err(CatalogError::Persistence(e)) => return Err(eyre!("{} added but not saved to disk: {}", kind, e)),
        Err(e) => return Err(eyre!("Could not add {}: {}", kind, e)),
    };

    if output.is_human() {
        output.success(format!("Added {} '{}' with id {}", kind, title.trim(), id));
    } else {
        output.json(&json!({ "type": "added", "kind": kind, "id": id }));
    }
    Ok(id)
}
