use super::entry::EntryArgs;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use mediadiary_core::{CatalogError, Library};
use mediadiary_models::MediaKind;
use serde_json::json;

pub fn run_edit(
    library: &mut Library,
    kind: MediaKind,
    id: u64,
    fields: &EntryArgs,
    drop_seasons: &[u32],
    output: &Output,
) -> Result<()> {
    fields.check_applies_to(kind)?;
    if !drop_seasons.is_empty() && kind != MediaKind::Series {
        return Err(eyre!("--drop-season only applies to series"));
    }
    if fields.is_empty() && drop_seasons.is_empty() {
        return Err(eyre!("Nothing to change; pass at least one field flag"));
    }

    let result = match kind {
        MediaKind::Book => match library.books().get(id).cloned() {
            Some(mut book) => {
                fields.apply_to_book(&mut book);
                library.books_mut().update(book)
            }
            None => Err(CatalogError::NotFound { kind, id }),
        },
        MediaKind::Movie => match library.movies().get(id).cloned() {
            Some(mut movie) => {
                fields.apply_to_movie(&mut movie);
                library.movies_mut().update(movie)
            }
            None => Err(CatalogError::NotFound { kind, id }),
        },
        MediaKind::Series => library
            .series_mut()
            .modify(id, |series| fields.apply_to_series(series, drop_seasons)),
    };

    match result {
        Ok(()) => {
            if output.is_human() {
                output.success(format!("Updated {} {}", kind, id));
            } else {
                output.json(&json!({ "type": "updated", "kind": kind, "id": id }));
            }
            Ok(())
        }
        Err(CatalogError::Persistence(e)) => Err(eyre!("{} {} changed but not saved to disk: {}", kind, id, e)),
        Err(e) => Err(eyre!("Could not update {} {}: {}", kind, id, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::run_add;
    use crate::output::OutputFormat;
    use mediadiary_config::PathManager;
    use mediadiary_models::{Media, YearBounds};
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> Library {
        Library::open(&PathManager::from_base(dir.path()), YearBounds::new(0, 2100))
    }

    fn silent() -> Output {
        Output::new(OutputFormat::Json, true)
    }

    fn args(title: &str, year: i32) -> EntryArgs {
        EntryArgs {
            title: Some(title.to_string()),
            year: Some(year),
            ..EntryArgs::default()
        }
    }

    #[test]
    fn test_add_populates_an_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let mut library = open(&dir);

        let fields = EntryArgs {
            creator: Some("Frank Herbert".to_string()),
            isbn: Some("978-0441013593".to_string()),
            ..args("Dune", 1965)
        };
        let id = run_add(&mut library, MediaKind::Book, &fields, &silent()).unwrap();
        assert_eq!(id, 1);

        let reopened = open(&dir);
        let book = reopened.books().get(1).unwrap();
        assert_eq!(book.creator_name(), "Frank Herbert");
        assert_eq!(book.isbn(), Some("978-0441013593"));
    }

    #[test]
    fn test_add_rejects_missing_or_invalid_fields() {
        let dir = TempDir::new().unwrap();
        let mut library = open(&dir);

        let no_year = EntryArgs { year: None, ..args("Dune", 1965) };
        assert!(run_add(&mut library, MediaKind::Book, &no_year, &silent()).is_err());
        assert!(run_add(&mut library, MediaKind::Movie, &args("  ", 2000), &silent()).is_err());
        assert!(run_add(&mut library, MediaKind::Movie, &args("Far future", 3000), &silent()).is_err());
        assert_eq!(library.total(), 0);
    }

    #[test]
    fn test_edit_updates_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut library = open(&dir);
        let id = run_add(&mut library, MediaKind::Movie, &args("Arrival", 2016), &silent()).unwrap();

        let fields = EntryArgs {
            done: Some(true),
            duration: Some(116),
            ..EntryArgs::default()
        };
        run_edit(&mut library, MediaKind::Movie, id, &fields, &[], &silent()).unwrap();

        let reopened = open(&dir);
        let movie = reopened.movies().get(id).unwrap();
        assert!(movie.watched_status());
        assert_eq!(movie.duration(), 116);
        assert_eq!(movie.title(), "Arrival");
    }

    #[test]
    fn test_edit_series_seasons() {
        let dir = TempDir::new().unwrap();
        let mut library = open(&dir);
        let fields = EntryArgs {
            seasons: vec!["1:10:2017".parse().unwrap(), "2:8:2019".parse().unwrap()],
            ..args("Dark", 2017)
        };
        let id = run_add(&mut library, MediaKind::Series, &fields, &silent()).unwrap();

        let fields = EntryArgs {
            end_year: Some(2020),
            seasons: vec!["3:8:2020".parse().unwrap()],
            ..EntryArgs::default()
        };
        run_edit(&mut library, MediaKind::Series, id, &fields, &[1], &silent()).unwrap();

        let series = open(&dir).series().get(id).cloned().unwrap();
        assert!(!series.is_ongoing());
        let numbers: Vec<u32> = series.seasons().iter().map(|s| s.season_number()).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn test_edit_failures_are_errors() {
        let dir = TempDir::new().unwrap();
        let mut library = open(&dir);
        let id = run_add(&mut library, MediaKind::Book, &args("Emma", 1815), &silent()).unwrap();

        let rename = args("Persuasion", 1817);
        assert!(run_edit(&mut library, MediaKind::Book, 99, &rename, &[], &silent()).is_err());
        assert!(run_edit(&mut library, MediaKind::Book, id, &EntryArgs::default(), &[], &silent()).is_err());

        let bad_year = EntryArgs { year: Some(-10), ..EntryArgs::default() };
        assert!(run_edit(&mut library, MediaKind::Book, id, &bad_year, &[], &silent()).is_err());
        assert_eq!(library.books().get(id).unwrap().release_year(), 1815);

        let wrong_kind = EntryArgs { duration: Some(90), ..EntryArgs::default() };
        assert!(run_edit(&mut library, MediaKind::Book, id, &wrong_kind, &[], &silent()).is_err());
    }
}
