use super::*;
use chrono::NaiveDate;
use mediadiary_models::Season;
use tempfile::TempDir;

fn bounds() -> YearBounds {
    YearBounds::new(0, 2100)
}

fn book_draft(title: &str, year: i32) -> NewBook {
    NewBook {
        title: title.to_string(),
        genres: vec!["Fiction".to_string()],
        release_year: year,
        author: "Author".to_string(),
        read_status: true,
        read_date: NaiveDate::from_ymd_opt(2024, 5, 1),
        ..NewBook::default()
    }
}

fn book_store(dir: &TempDir) -> CatalogStore<Book> {
    CatalogStore::load(dir.path().join("data").join("books.json"), bounds())
}

#[test]
fn test_missing_file_gives_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let store = book_store(&dir);
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
}

#[test]
fn test_empty_and_corrupt_files_give_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");

    std::fs::write(&path, "   \n").unwrap();
    assert!(CatalogStore::<Book>::load(&path, bounds()).is_empty());

    std::fs::write(&path, "{ not json").unwrap();
    assert!(CatalogStore::<Book>::load(&path, bounds()).is_empty());

    std::fs::write(&path, r#"[{"bookId": 1, "title": "Bad", "reviewInfo": {"reviews": [{"rating": 8, "createdAt": "2024-01-01T00:00:00Z"}]}}]"#).unwrap();
    assert!(CatalogStore::<Book>::load(&path, bounds()).is_empty());
}

#[test]
fn test_add_creates_directory_and_writes_through() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);

    let id = store.add(book_draft("1984", 1949)).unwrap();
    assert_eq!(id, 1);
    assert!(store.path().exists());

    let reloaded = book_store(&dir);
    assert_eq!(reloaded.get_all(), store.get_all());
}

#[test]
fn test_ids_resume_after_max_loaded_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[
            {"bookId": 4, "title": "A", "releaseYear": 2001},
            {"bookId": 9, "title": "B", "releaseYear": 2002},
            {"bookId": 2, "title": "C", "releaseYear": 2003}
        ]"#,
    )
    .unwrap();

    let mut store = CatalogStore::<Book>::load(&path, bounds());
    assert_eq!(store.len(), 3);
    let id = store.add(book_draft("D", 2004)).unwrap();
    assert_eq!(id, 10);

    let mut ids: Vec<u64> = store.get_all().iter().map(|b| b.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_ids_are_not_reused_after_removal() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    store.add(book_draft("First", 2000)).unwrap();
    let second = store.add(book_draft("Second", 2001)).unwrap();

    store.remove(second).unwrap();
    let third = store.add(book_draft("Third", 2002)).unwrap();
    assert_eq!(third, 3);
}

#[test]
fn test_invalid_draft_is_rejected_without_consuming_an_id() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);

    let err = store.add(book_draft("  ", 2000)).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(ValidationError::BlankField("title"))));

    let err = store.add(book_draft("Far future", 3000)).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(ValidationError::YearOutOfRange { year: 3000, .. })));

    assert!(store.is_empty());
    assert!(!store.path().exists());
    assert_eq!(store.add(book_draft("Valid", 2000)).unwrap(), 1);
}

#[test]
fn test_update_replaces_matching_record() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    let id = store.add(book_draft("Dune", 1965)).unwrap();

    let mut book = store.get(id).cloned().unwrap();
    book.set_author("Frank Herbert");
    store.update(book).unwrap();

    let reloaded = book_store(&dir);
    assert_eq!(reloaded.get(id).unwrap().author(), "Frank Herbert");
}

#[test]
fn test_update_and_remove_unknown_id_are_not_found() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    store.add(book_draft("Dune", 1965)).unwrap();

    let stranger = Book::new(42, book_draft("Stranger", 1990));
    let err = store.update(stranger).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: MediaKind::Book, id: 42 }));
    assert!(err.is_not_found());

    assert!(store.remove(42).unwrap_err().is_not_found());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_review_and_rejected_review() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    let id = store.add(book_draft("Dune", 1965)).unwrap();

    store.add_review(id, 4, "Dense but rewarding").unwrap();
    let err = store.add_review(id, 7, "Off the scale").unwrap_err();
    assert!(matches!(err, CatalogError::Validation(ValidationError::RatingOutOfRange(7))));

    let book = store.get(id).unwrap();
    assert_eq!(book.review_info().review_count(), 1);
    assert_eq!(book.review_info().last_rating(), Some(4));
}

#[test]
fn test_modify_failure_leaves_record_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    let id = store.add(book_draft("Dune", 1965)).unwrap();

    let result = store.modify(id, |book| {
        book.set_title("Renamed");
        book.set_release_year(-5);
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(store.get(id).unwrap().title(), "Dune");
}

#[test]
fn test_round_trip_preserves_fields_and_reviews() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    let mut store = CatalogStore::<Movie>::load(&path, bounds());

    let id = store
        .add(NewMovie {
            title: "A Origem".to_string(),
            original_title: "Inception".to_string(),
            genres: vec!["Sci-Fi".to_string(), "Sci-Fi".to_string()],
            release_year: 2010,
            duration: 148,
            director: "Christopher Nolan".to_string(),
            cast: vec!["Leonardo DiCaprio".to_string()],
            where_to_watch: vec!["Netflix".to_string()],
            watched_status: true,
            watch_date: NaiveDate::from_ymd_opt(2023, 12, 24),
            ..NewMovie::default()
        })
        .unwrap();
    store.add_review(id, 5, "Still great").unwrap();
    store.add_review(id, 4, "").unwrap();

    let reloaded = CatalogStore::<Movie>::load(&path, bounds());
    assert_eq!(reloaded.get_all(), store.get_all());
    let movie = reloaded.get(id).unwrap();
    assert_eq!(movie.genres().len(), 2);
    assert_eq!(movie.review_info().last_rating(), Some(4));
    assert_eq!(movie.watch_date(), NaiveDate::from_ymd_opt(2023, 12, 24));
}

#[test]
fn test_dates_are_written_as_iso_8601() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    store.add(book_draft("Dune", 1965)).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("\"readDate\": \"2024-05-01\""));
    assert!(content.contains("\"bookId\": 1"));
}

#[test]
fn test_season_review_through_series_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("series.json");
    let mut store = CatalogStore::<Series>::load(&path, bounds());

    let id = store
        .add(NewSeries {
            title: "Dark".to_string(),
            release_year: 2017,
            end_year: 2020,
            watched_status: true,
            seasons: vec![Season::new(1, 10, 2017, &[]), Season::new(2, 8, 2019, &[])],
            ..NewSeries::default()
        })
        .unwrap();

    store.review_season(id, 2, 5, "Mind-bending").unwrap();
    let err = store.review_season(id, 3, 4, "").unwrap_err();
    assert!(matches!(err, CatalogError::SeasonNotFound { season_number: 3, .. }));

    let reloaded = CatalogStore::<Series>::load(&path, bounds());
    let series = reloaded.get(id).unwrap();
    assert_eq!(series.rated_seasons_count(), 1);
    assert_eq!(series.average_rating(), 5.0);
}

#[test]
fn test_get_all_is_a_copy() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    store.add(book_draft("Dune", 1965)).unwrap();

    let mut copy = store.get_all();
    copy[0].set_title("Changed outside");
    copy.clear();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).unwrap().title(), "Dune");
}

#[test]
fn test_search_blank_equals_get_all() {
    let dir = TempDir::new().unwrap();
    let mut store = book_store(&dir);
    store.add(book_draft("Dune", 1965)).unwrap();
    store.add(book_draft("Emma", 1815)).unwrap();

    assert_eq!(store.search(""), store.get_all());
    assert_eq!(store.find_by_title("EMMA").map(|b| b.id()), Some(2));
}

#[test]
fn test_save_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let mut store = CatalogStore::<Book>::load(blocker.join("books.json"), bounds());
    let err = store.add(book_draft("Dune", 1965)).unwrap_err();
    assert!(matches!(err, CatalogError::Persistence(PersistenceError::CreateDir { .. })));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_largest_possible_id_falls_back_to_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        format!(r#"[{{"bookId": {}, "title": "A", "releaseYear": 2001}}]"#, u64::MAX),
    )
    .unwrap();

    let mut store = CatalogStore::<Book>::load(&path, bounds());
    assert!(store.is_empty());
    assert_eq!(store.add(book_draft("Fresh", 2001)).unwrap(), 1);
}

#[test]
fn test_add_fails_once_ids_run_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        format!(r#"[{{"bookId": {}, "title": "A", "releaseYear": 2001}}]"#, u64::MAX - 1),
    )
    .unwrap();

    let mut store = CatalogStore::<Book>::load(&path, bounds());
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), u64::MAX);

    let err = store.add(book_draft("One too many", 2001)).unwrap_err();
    assert!(matches!(err, CatalogError::IdsExhausted { kind: MediaKind::Book }));
    assert_eq!(store.len(), 1);
}
