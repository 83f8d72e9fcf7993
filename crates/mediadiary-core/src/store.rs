use mediadiary_models::{
    Book, Media, MediaKind, Movie, NewBook, NewMovie, NewSeries, Series, ValidationError, YearBounds,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, PersistenceError};
use crate::id_allocator::IdAllocator;
use crate::query::{self, Listing, ListingQuery};

/// A record kind that can live in a [`CatalogStore`].
pub trait Record: Media + Clone + Serialize + DeserializeOwned {
    const KIND: MediaKind;

    /// Creation input: all fields except the id.
    type Draft;

    fn from_draft(id: u64, draft: Self::Draft) -> Self;
}

impl Record for Book {
    const KIND: MediaKind = MediaKind::Book;
    type Draft = NewBook;

    fn from_draft(id: u64, draft: NewBook) -> Self {
        Book::new(id, draft)
    }
}

impl Record for Movie {
    const KIND: MediaKind = MediaKind::Movie;
    type Draft = NewMovie;

    fn from_draft(id: u64, draft: NewMovie) -> Self {
        Movie::new(id, draft)
    }
}

impl Record for Series {
    const KIND: MediaKind = MediaKind::Series;
    type Draft = NewSeries;

    fn from_draft(id: u64, draft: NewSeries) -> Self {
        Series::new(id, draft)
    }
}

/// Records that keep their own review history.
pub trait Reviewable {
    fn append_review(&mut self, rating: i64, comment: &str) -> Result<(), ValidationError>;
}

impl Reviewable for Book {
    fn append_review(&mut self, rating: i64, comment: &str) -> Result<(), ValidationError> {
        self.add_review(rating, comment)
    }
}

impl Reviewable for Movie {
    fn append_review(&mut self, rating: i64, comment: &str) -> Result<(), ValidationError> {
        self.add_review(rating, comment)
    }
}

/// In-memory catalog of one media kind, written through to a JSON file after
/// every mutation.
///
/// Each mutation rewrites the whole file. That is fine for a personal catalog;
/// there is no batching and no transaction spanning several mutations. If the
/// write fails the mutation stays applied in memory and the error is returned.
pub struct CatalogStore<R: Record> {
    path: PathBuf,
    items: Vec<R>,
    ids: IdAllocator,
    bounds: YearBounds,
}

impl<R: Record> CatalogStore<R> {
    /// Load the catalog at `path`. Missing, empty or unreadable files give an
    /// empty catalog; the problem is logged, not returned.
    pub fn load(path: impl Into<PathBuf>, bounds: YearBounds) -> Self {
        let path = path.into();
        let loaded = read_catalog::<R>(&path).and_then(|items| {
            let ids = IdAllocator::resume_from(items.iter().map(Media::id))
                .ok_or_else(|| PersistenceError::IdsExhausted { path: path.clone() })?;
            Ok((items, ids))
        });
        let (items, ids) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("{}. Starting with an empty {} catalog.", e, R::KIND);
                (Vec::new(), IdAllocator::new())
            }
        };
        debug!("{} catalog: next id {}", R::KIND, ids.peek());
        Self { path, items, ids, bounds }
    }

    /// Write the full catalog, pretty-printed. The file is replaced atomically
    /// (temp file + rename) so a failed write leaves the previous file intact.
    pub fn save(&self) -> Result<(), PersistenceError> {
        write_catalog(&self.path, &self.items)?;
        debug!("Saved {} catalog: {} entries to {:?}", R::KIND, self.items.len(), self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    /// Validate, assign the next id, append and save. Returns the new id.
    pub fn add(&mut self, draft: R::Draft) -> Result<u64, CatalogError> {
        // Built with the peeked id so a rejected draft does not consume one.
        let record = R::from_draft(self.ids.peek(), draft);
        record.validate(&self.bounds)?;
        let id = self.ids.claim().ok_or(CatalogError::IdsExhausted { kind: R::KIND })?;

        info!("Added {} '{}' (id {})", R::KIND, record.title(), id);
        self.items.push(record);
        self.save()?;
        Ok(id)
    }

    /// Replace the record with the same id and save.
    pub fn update(&mut self, record: R) -> Result<(), CatalogError> {
        record.validate(&self.bounds)?;
        let index = self.position(record.id())?;
        info!("Updated {} '{}' (id {})", R::KIND, record.title(), record.id());
        self.items[index] = record;
        self.save()?;
        Ok(())
    }

    /// Apply an edit to one record in place and save. The edit runs on a copy,
    /// so a failing edit or a record that no longer validates changes nothing.
    pub fn modify<F>(&mut self, id: u64, edit: F) -> Result<(), CatalogError>
    where
        F: FnOnce(&mut R) -> Result<(), CatalogError>,
    {
        let index = self.position(id)?;
        let mut edited = self.items[index].clone();
        edit(&mut edited)?;
        edited.validate(&self.bounds)?;
        self.items[index] = edited;
        self.save()?;
        Ok(())
    }

    /// Delete by id and save. The id is never reused.
    pub fn remove(&mut self, id: u64) -> Result<R, CatalogError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        info!("Removed {} '{}' (id {})", R::KIND, removed.title(), id);
        self.save()?;
        Ok(removed)
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Copy of the whole catalog in insertion order.
    pub fn get_all(&self) -> Vec<R> {
        self.items.clone()
    }

    pub fn search(&self, criteria: &str) -> Vec<R> {
        query::search(&self.items, criteria)
    }

    pub fn find_by_title(&self, title: &str) -> Option<R> {
        query::find_by_title(&self.items, title)
    }

    pub fn list(&self, listing: &ListingQuery) -> Listing<R> {
        query::list(&self.items, listing)
    }

    fn position(&self, id: u64) -> Result<usize, CatalogError> {
        self.items
            .iter()
            .position(|r| r.id() == id)
            .ok_or(CatalogError::NotFound { kind: R::KIND, id })
    }
}

impl<R: Record + Reviewable> CatalogStore<R> {
    pub fn add_review(&mut self, id: u64, rating: i64, comment: &str) -> Result<(), CatalogError> {
        self.modify(id, |record| Ok(record.append_review(rating, comment)?))
    }
}

impl CatalogStore<Series> {
    pub fn review_season(
        &mut self,
        series_id: u64,
        season_number: u32,
        rating: i64,
        comment: &str,
    ) -> Result<(), CatalogError> {
        self.modify(series_id, |series| {
            let season = series
                .season_mut(season_number)
                .ok_or(CatalogError::SeasonNotFound { series_id, season_number })?;
            Ok(season.add_review(rating, comment)?)
        })
    }
}

fn read_catalog<R: Record>(path: &Path) -> Result<Vec<R>, PersistenceError> {
    if !path.exists() {
        info!("Catalog file {:?} not found; it will be created on first save", path);
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        info!("Catalog file {:?} is empty", path);
        return Ok(Vec::new());
    }

    let items: Vec<R> = serde_json::from_str(&content).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} {} entries from {:?}", items.len(), R::KIND, path);
    Ok(items)
}

fn write_catalog<R: Serialize>(path: &Path, items: &[R]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| {
            warn!("Failed to create catalog directory {:?}: {}", parent, source);
            PersistenceError::CreateDir {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }

    let json = serde_json::to_string_pretty(items).map_err(|source| PersistenceError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, json)
        .and_then(|_| std::fs::rename(&temp_path, path))
        .map_err(|source| {
            warn!("Failed to write catalog file {:?}: {}", path, source);
            let _ = std::fs::remove_file(&temp_path);
            PersistenceError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
}

#[cfg(test)]
mod tests;
