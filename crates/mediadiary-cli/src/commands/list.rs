use crate::output::Output;
use color_eyre::Result;
use mediadiary_core::{count_by_kind, FilterStage, Library, ListingFilter, ListingQuery, SortOrder};
use mediadiary_models::MediaKind;

pub fn run_list(
    library: &Library,
    kind: Option<MediaKind>,
    genre: Option<String>,
    year: Option<i32>,
    sort: SortOrder,
    output: &Output,
) -> Result<()> {
    let query = ListingQuery {
        filter: ListingFilter { genre: genre.clone(), year },
        sort,
    };
    let listing = library.list(kind, &query);

    if output.is_human() {
        match listing.emptied_at {
            Some(FilterStage::Genre) => {
                output.warn(format!("No entries found for genre '{}'", genre.unwrap_or_default().trim()));
            }
            Some(FilterStage::Year) => {
                output.warn(format!("No entries found for year {}", year.unwrap_or_default()));
            }
            None => {}
        }
        if listing.items.is_empty() {
            if !listing.narrowed {
                output.info("The catalog is empty.");
            }
            return Ok(());
        }

        let counts = count_by_kind(&listing.items)
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(k, n)| format!("{} {}", n, k))
            .collect::<Vec<_>>()
            .join(", ");
        let suffix = if listing.narrowed { " (filtered/sorted)" } else { "" };
        output.info(format!("{} entries: {}{}", listing.items.len(), counts, suffix));
    }

    output.media_list(&listing.items);
    Ok(())
}
