use mediadiary_config::PathManager;
use mediadiary_models::{Book, Media, MediaItem, MediaKind, Movie, Series, YearBounds};
use tracing::info;

use crate::error::CatalogError;
use crate::query::{self, Listing, ListingQuery};
use crate::store::CatalogStore;

/// The three catalogs behind one facade, for surfaces that work across kinds.
pub struct Library {
    books: CatalogStore<Book>,
    movies: CatalogStore<Movie>,
    series: CatalogStore<Series>,
}

impl Library {
    pub fn open(paths: &PathManager, bounds: YearBounds) -> Self {
        let library = Self {
            books: CatalogStore::load(paths.catalog_file(MediaKind::Book), bounds),
            movies: CatalogStore::load(paths.catalog_file(MediaKind::Movie), bounds),
            series: CatalogStore::load(paths.catalog_file(MediaKind::Series), bounds),
        };
        info!(
            "Library opened: {} books, {} movies, {} series",
            library.books.len(),
            library.movies.len(),
            library.series.len()
        );
        library
    }

    pub fn books(&self) -> &CatalogStore<Book> {
        &self.books
    }

    pub fn books_mut(&mut self) -> &mut CatalogStore<Book> {
        &mut self.books
    }

    pub fn movies(&self) -> &CatalogStore<Movie> {
        &self.movies
    }

    pub fn movies_mut(&mut self) -> &mut CatalogStore<Movie> {
        &mut self.movies
    }

    pub fn series(&self) -> &CatalogStore<Series> {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut CatalogStore<Series> {
        &mut self.series
    }

    /// Books, then movies, then series, each in insertion order.
    pub fn all_media(&self) -> Vec<MediaItem> {
        self.media_of(None)
    }

    /// All entries of one kind, or of every kind when `kind` is `None`.
    pub fn media_of(&self, kind: Option<MediaKind>) -> Vec<MediaItem> {
        let wants = |k: MediaKind| kind.map_or(true, |wanted| wanted == k);
        let mut items = Vec::new();
        if wants(MediaKind::Book) {
            items.extend(self.books.get_all().into_iter().map(MediaItem::from));
        }
        if wants(MediaKind::Movie) {
            items.extend(self.movies.get_all().into_iter().map(MediaItem::from));
        }
        if wants(MediaKind::Series) {
            items.extend(self.series.get_all().into_iter().map(MediaItem::from));
        }
        items
    }

    /// Each catalog's search, concatenated in the same order as `all_media`.
    pub fn search_all(&self, criteria: &str) -> Vec<MediaItem> {
        let mut results: Vec<MediaItem> = Vec::new();
        results.extend(self.books.search(criteria).into_iter().map(MediaItem::from));
        results.extend(self.movies.search(criteria).into_iter().map(MediaItem::from));
        results.extend(self.series.search(criteria).into_iter().map(MediaItem::from));
        results
    }

    /// Filter and sort one kind (or everything) as a single listing.
    pub fn list(&self, kind: Option<MediaKind>, listing: &ListingQuery) -> Listing<MediaItem> {
        query::list(&self.media_of(kind), listing)
    }

    pub fn get(&self, kind: MediaKind, id: u64) -> Option<MediaItem> {
        match kind {
            MediaKind::Book => self.books.get(id).cloned().map(MediaItem::from),
            MediaKind::Movie => self.movies.get(id).cloned().map(MediaItem::from),
            MediaKind::Series => self.series.get(id).cloned().map(MediaItem::from),
        }
    }

    pub fn find_by_title(&self, title: &str) -> Option<MediaItem> {
        self.books
            .find_by_title(title)
            .map(MediaItem::from)
            .or_else(|| self.movies.find_by_title(title).map(MediaItem::from))
            .or_else(|| self.series.find_by_title(title).map(MediaItem::from))
    }

    pub fn remove(&mut self, kind: MediaKind, id: u64) -> Result<MediaItem, CatalogError> {
        let removed = match kind {
            MediaKind::Book => MediaItem::from(self.books.remove(id)?),
            MediaKind::Movie => MediaItem::from(self.movies.remove(id)?),
            MediaKind::Series => MediaItem::from(self.series.remove(id)?),
        };
        Ok(removed)
    }

    /// Review a book or movie. Series are reviewed per season.
    pub fn add_review(&mut self, kind: MediaKind, id: u64, rating: i64, comment: &str) -> Result<(), CatalogError> {
        match kind {
            MediaKind::Book => self.books.add_review(id, rating, comment),
            MediaKind::Movie => self.movies.add_review(id, rating, comment),
            MediaKind::Series => Err(CatalogError::NotReviewable { kind }),
        }
    }

    pub fn review_season(
        &mut self,
        series_id: u64,
        season_number: u32,
        rating: i64,
        comment: &str,
    ) -> Result<(), CatalogError> {
        self.series.review_season(series_id, season_number, rating, comment)
    }

    pub fn total(&self) -> usize {
        self.books.len() + self.movies.len() + self.series.len()
    }
}

/// Count of entries per kind in `items`, in `MediaKind::ALL` order.
pub fn count_by_kind(items: &[MediaItem]) -> [(MediaKind, usize); 3] {
    MediaKind::ALL.map(|kind| (kind, items.iter().filter(|i| i.kind() == kind).count()))
}
