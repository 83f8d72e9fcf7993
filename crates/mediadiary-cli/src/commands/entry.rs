use chrono::NaiveDate;
use clap::Args;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use mediadiary_core::CatalogError;
use mediadiary_models::{Book, MediaKind, Movie, NewBook, NewMovie, NewSeries, Season, Series};
use std::str::FromStr;

/// Field flags shared by `add` and `edit`. On `edit`, only the flags given are changed,
/// and a repeated list flag replaces the whole list.
#[derive(Debug, Clone, Default, Args)]
pub struct EntryArgs {
    #[arg(long)]
    pub title: Option<String>,

    /// Defaults to the title when left blank
    #[arg(long)]
    pub original_title: Option<String>,

    /// Genre (repeat for several)
    #[arg(long = "genre", value_name = "GENRE")]
    pub genres: Vec<String>,

    /// Release year
    #[arg(long)]
    pub year: Option<i32>,

    /// Author, director or creator depending on the kind
    #[arg(long, visible_aliases = ["author", "director"])]
    pub creator: Option<String>,

    /// Books only
    #[arg(long)]
    pub publisher: Option<String>,

    /// Books only
    #[arg(long)]
    pub isbn: Option<String>,

    /// Books only: whether you own a copy
    #[arg(long, value_name = "BOOL")]
    pub has_copy: Option<bool>,

    /// Read (books) or watched (movies, series)
    #[arg(long, value_name = "BOOL", visible_aliases = ["read", "watched"])]
    pub done: Option<bool>,

    /// Date read or watched, YYYY-MM-DD (books and movies)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Movies only: running time in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// Movies only
    #[arg(long)]
    pub synopsis: Option<String>,

    /// Cast member (repeat for several; movies and series)
    #[arg(long = "cast", value_name = "NAME")]
    pub cast: Vec<String>,

    /// Where to watch (repeat for several; movies and series)
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    /// Series only: last year aired, 0 while still running
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Series only: add a season, or change one with the same number
    #[arg(long = "season", value_name = "N:EPISODES:YEAR")]
    pub seasons: Vec<SeasonSpec>,
}

/// `N:EPISODES:YEAR`, e.g. `2:8:2019`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSpec {
    pub number: u32,
    pub episodes: u32,
    pub year: i32,
}

impl FromStr for SeasonSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid season '{}'. Use N:EPISODES:YEAR, e.g. 2:8:2019", s);
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [number, episodes, year] = parts.as_slice() else {
            return Err(invalid());
        };
        Ok(Self {
            number: number.parse().map_err(|_| invalid())?,
            episodes: episodes.parse().map_err(|_| invalid())?,
            year: year.parse().map_err(|_| invalid())?,
        })
    }
}

impl SeasonSpec {
    fn to_season(self) -> Season {
        Season::new(self.number, self.episodes, self.year, &[])
    }
}

impl EntryArgs {
    /// Per-kind flags and whether each was given.
    fn kind_flags(&self) -> [(&'static str, bool); 10] {
        [
            ("--publisher", self.publisher.is_some()),
            ("--isbn", self.isbn.is_some()),
            ("--has-copy", self.has_copy.is_some()),
            ("--date", self.date.is_some()),
            ("--duration", self.duration.is_some()),
            ("--synopsis", self.synopsis.is_some()),
            ("--cast", !self.cast.is_empty()),
            ("--platform", !self.platforms.is_empty()),
            ("--end-year", self.end_year.is_some()),
            ("--season", !self.seasons.is_empty()),
        ]
    }

    /// Flags that were given but mean nothing for `kind`.
    fn foreign_flags(&self, kind: MediaKind) -> Vec<&'static str> {
        let allowed: &[&str] = match kind {
            MediaKind::Book => &["--publisher", "--isbn", "--has-copy", "--date"],
            MediaKind::Movie => &["--date", "--duration", "--synopsis", "--cast", "--platform"],
            MediaKind::Series => &["--cast", "--platform", "--end-year", "--season"],
        };
        self.kind_flags()
            .into_iter()
            .filter(|(flag, set)| *set && !allowed.contains(flag))
            .map(|(flag, _)| flag)
            .collect()
    }

    pub fn check_applies_to(&self, kind: MediaKind) -> Result<()> {
        let foreign = self.foreign_flags(kind);
        if foreign.is_empty() {
            Ok(())
        } else {
            Err(eyre!("{} cannot be used with a {}", foreign.join(", "), kind))
        }
    }

    /// True when no field flag was given at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.original_title.is_none()
            && self.genres.is_empty()
            && self.year.is_none()
            && self.creator.is_none()
            && self.done.is_none()
            && self.kind_flags().iter().all(|(_, set)| !set)
    }

    pub fn book_draft(&self) -> NewBook {
        NewBook {
            title: self.title.clone().unwrap_or_default(),
            original_title: self.original_title.clone().unwrap_or_default(),
            genres: self.genres.clone(),
            release_year: self.year.unwrap_or_default(),
            author: self.creator.clone().unwrap_or_default(),
            publisher: self.publisher.clone().unwrap_or_default(),
            isbn: self.isbn.clone().unwrap_or_default(),
            has_copy: self.has_copy.unwrap_or(false),
            read_status: self.done.unwrap_or(false),
            read_date: self.date,
            ..NewBook::default()
        }
    }

    pub fn movie_draft(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone().unwrap_or_default(),
            original_title: self.original_title.clone().unwrap_or_default(),
            genres: self.genres.clone(),
            release_year: self.year.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            director: self.creator.clone().unwrap_or_default(),
            synopsis: self.synopsis.clone().unwrap_or_default(),
            cast: self.cast.clone(),
            where_to_watch: self.platforms.clone(),
            watched_status: self.done.unwrap_or(false),
            watch_date: self.date,
            ..NewMovie::default()
        }
    }

    pub fn series_draft(&self) -> NewSeries {
        let mut seasons: Vec<Season> = self.seasons.iter().map(|spec| spec.to_season()).collect();
        seasons.sort_by_key(Season::season_number);
        NewSeries {
            title: self.title.clone().unwrap_or_default(),
            original_title: self.original_title.clone().unwrap_or_default(),
            creator: self.creator.clone().unwrap_or_default(),
            genres: self.genres.clone(),
            release_year: self.year.unwrap_or_default(),
            end_year: self.end_year.unwrap_or_default(),
            where_to_watch: self.platforms.clone(),
            cast: self.cast.clone(),
            watched_status: self.done.unwrap_or(false),
            seasons,
        }
    }

    pub fn apply_to_book(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.set_title(title);
        }
        if let Some(original_title) = &self.original_title {
            book.set_original_title(original_title);
        }
        if !self.genres.is_empty() {
            book.set_genres(&self.genres);
        }
        if let Some(year) = self.year {
            book.set_release_year(year);
        }
        if let Some(author) = &self.creator {
            book.set_author(author);
        }
        if let Some(publisher) = &self.publisher {
            book.set_publisher(publisher);
        }
        if let Some(isbn) = &self.isbn {
            book.set_isbn(isbn);
        }
        if let Some(has_copy) = self.has_copy {
            book.set_has_copy(has_copy);
        }
        if let Some(read) = self.done {
            book.set_read_status(read);
        }
        if self.date.is_some() {
            book.set_read_date(self.date);
        }
    }

    pub fn apply_to_movie(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.set_title(title);
        }
        if let Some(original_title) = &self.original_title {
            movie.set_original_title(original_title);
        }
        if !self.genres.is_empty() {
            movie.set_genres(&self.genres);
        }
        if let Some(year) = self.year {
            movie.set_release_year(year);
        }
        if let Some(director) = &self.creator {
            movie.set_director(director);
        }
        if let Some(minutes) = self.duration {
            movie.set_duration(minutes);
        }
        if let Some(synopsis) = &self.synopsis {
            movie.set_synopsis(synopsis);
        }
        if !self.cast.is_empty() {
            movie.set_cast(&self.cast);
        }
        if !self.platforms.is_empty() {
            movie.set_where_to_watch(&self.platforms);
        }
        if let Some(watched) = self.done {
            movie.set_watched_status(watched);
        }
        if self.date.is_some() {
            movie.set_watch_date(self.date);
        }
    }

    /// Dropped seasons go first, then `--season` values either change the season with
    /// that number (keeping its reviews) or add a new one. Seasons stay ordered by number.
    pub fn apply_to_series(&self, series: &mut Series, drop_seasons: &[u32]) -> Result<(), CatalogError> {
        if let Some(title) = &self.title {
            series.set_title(title);
        }
        if let Some(original_title) = &self.original_title {
            series.set_original_title(original_title);
        }
        if !self.genres.is_empty() {
            series.set_genres(&self.genres);
        }
        if let Some(year) = self.year {
            series.set_release_year(year);
        }
        if let Some(creator) = &self.creator {
            series.set_creator(creator);
        }
        if let Some(end_year) = self.end_year {
            series.set_end_year(end_year);
        }
        if !self.cast.is_empty() {
            series.set_cast(&self.cast);
        }
        if !self.platforms.is_empty() {
            series.set_where_to_watch(&self.platforms);
        }
        if let Some(watched) = self.done {
            series.set_watched_status(watched);
        }

        for &season_number in drop_seasons {
            series.remove_season(season_number).ok_or(CatalogError::SeasonNotFound {
                series_id: series.series_id(),
                season_number,
            })?;
        }
        for spec in &self.seasons {
            match series.season_mut(spec.number) {
                Some(season) => {
                    season.set_episodes(spec.episodes);
                    season.set_release_year(spec.year);
                }
                None => series.add_season(spec.to_season()),
            }
        }
        let mut seasons = series.seasons().to_vec();
        seasons.sort_by_key(Season::season_number);
        series.set_seasons(&seasons);
        Ok(())
    }
}
