use crate::output::{rating_label, Output};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use mediadiary_core::Library;
use mediadiary_models::{Media, MediaItem, MediaKind, ReviewInfo, Series};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_show(library: &Library, kind: MediaKind, id: u64, history: usize, output: &Output) -> Result<()> {
    let item = library.get(kind, id).ok_or_else(|| eyre!("No {} with id {}", kind, id))?;

    if !output.is_human() {
        let reviews = review_info(&item).map(|info| info.history(Some(history)));
        output.json(&json!({ "item": item, "recentReviews": reviews }));
        return Ok(());
    }

    println!("\n{} {}", item.title().bright_cyan().bold(), format!("({})", item.release_year()).dimmed());
    if item.original_title() != item.title() {
        println!("{}", item.original_title().italic());
    }
    println!();
    println!("{}", details_table(&item));

    match &item {
        MediaItem::Series(series) => print_seasons(series),
        _ => {
            if let Some(info) = review_info(&item) {
                print_history(info, history);
            }
        }
    }
    Ok(())
}

fn review_info(item: &MediaItem) -> Option<&ReviewInfo> {
    match item {
        MediaItem::Book(book) => Some(book.review_info()),
        MediaItem::Movie(movie) => Some(movie.review_info()),
        MediaItem::Series(_) => None,
    }
}

fn details_table(item: &MediaItem) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);

    let mut row = |label: &str, value: String| {
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
    };

    row("Id", item.id().to_string());
    row(item.kind().creator_label(), item.creator_name().to_string());
    row("Genres", item.genres().join(", "));
    match item {
        MediaItem::Book(book) => {
            row("Publisher", book.publisher().to_string());
            row("ISBN", book.isbn().unwrap_or_default().to_string());
            row("Own a copy", yes_no(book.has_copy()));
            row("Read", yes_no(book.read_status()));
            if let Some(date) = book.read_date() {
                row("Read on", date.to_string());
            }
        }
        MediaItem::Movie(movie) => {
            row("Duration", format!("{} min", movie.duration()));
            row("Cast", movie.cast().join(", "));
            row("Where to watch", movie.where_to_watch().join(", "));
            row("Watched", yes_no(movie.watched_status()));
            if let Some(date) = movie.watch_date() {
                row("Watched on", date.to_string());
            }
            if !movie.synopsis().is_empty() {
                row("Synopsis", movie.synopsis().to_string());
            }
        }
        MediaItem::Series(series) => {
            let end = if series.is_ongoing() {
                "ongoing".to_string()
            } else {
                series.end_year().to_string()
            };
            row("Aired", format!("{} - {}", series.release_year(), end));
            row("Cast", series.cast().join(", "));
            row("Where to watch", series.where_to_watch().join(", "));
            row("Watched", yes_no(series.watched_status()));
        }
    }
    row("Rating", rating_label(item));
    table
}

fn print_seasons(series: &Series) {
    if series.seasons().is_empty() {
        println!("No seasons recorded.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(["Season", "Episodes", "Year", "Reviews", "Average"].map(|h| Cell::new(h).add_attribute(Attribute::Bold)));
    for season in series.seasons() {
        let average = if season.is_rated() {
            Cell::new(format!("{:.2}/5", season.average_rating())).fg(Color::Green)
        } else {
            Cell::new("-")
        };
        table.add_row(vec![
            Cell::new(season.season_number()),
            Cell::new(season.episodes()),
            Cell::new(season.release_year()),
            Cell::new(season.review_info().review_count()),
            average,
        ]);
    }
    println!("{}", table);
}

fn print_history(info: &ReviewInfo, limit: usize) {
    if !info.has_reviews() {
        println!("No reviews yet.");
        return;
    }

    println!("{}", "Recent reviews".bold());
    for review in info.history(Some(limit)) {
        let stars = "★".repeat(review.rating() as usize) + &"☆".repeat(5 - review.rating() as usize);
        println!(
            "  {} {} {}",
            stars.yellow(),
            review.created_at().format("%Y-%m-%d %H:%M").to_string().dimmed(),
            review.comment()
        );
    }
    let hidden = info.review_count().saturating_sub(limit);
    if hidden > 0 {
        println!("  {}", format!("... and {} older", hidden).dimmed());
    }
}

fn yes_no(value: bool) -> String {
    if value { "✓".green().to_string() } else { "✗".red().to_string() }
}
