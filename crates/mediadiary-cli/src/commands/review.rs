use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use mediadiary_core::{CatalogError, Library};
use mediadiary_models::{Media, MediaKind};

pub fn run_review(
    library: &mut Library,
    kind: MediaKind,
    id: u64,
    rating: i64,
    comment: &str,
    season: Option<u32>,
    output: &Output,
) -> Result<()> {
    let result = match (kind, season) {
        (MediaKind::Series, Some(season_number)) => library.review_season(id, season_number, rating, comment),
        (MediaKind::Series, None) => {
            return Err(eyre!("Series are reviewed per season; pass --season <NUMBER>"));
        }
        (_, Some(_)) => return Err(eyre!("--season only applies to series, not to a {}", kind)),
        (_, None) => library.add_review(kind, id, rating, comment),
    };

    match result {
        Ok(()) => {
            let average = library.get(kind, id).map(|item| item.average_rating()).unwrap_or_default();
            output.success(format!("Review saved. Average rating is now {:.2}/5", average));
            Ok(())
        }
        // The review is kept in memory but the catalog file was not updated
        Err(CatalogError::Persistence(e)) => Err(eyre!("Review not saved to disk: {}", e)),
        Err(e) => Err(eyre!("Review rejected: {}", e)),
    }
}
