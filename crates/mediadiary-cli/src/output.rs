use clap::ValueEnum;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use mediadiary_models::{Media, MediaItem};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Error,
    Info,
    Warning,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
            Level::Warning => "warning",
        }
    }
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message(Level::Success, msg.as_ref());
    }

    /// Shown even in quiet mode.
    pub fn error(&self, msg: impl AsRef<str>) {
        self.message(Level::Error, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message(Level::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message(Level::Warning, msg.as_ref());
    }

    fn message(&self, level: Level, msg: &str) {
        if self.quiet && level != Level::Error {
            return;
        }
        match (self.format, level) {
            (OutputFormat::Human, Level::Success) => println!("{} {}", "✓".green(), msg),
            (OutputFormat::Human, Level::Error) => eprintln!("{} {}", "✗".red(), msg),
            (OutputFormat::Human, Level::Warning) => println!("{} {}", "⚠".yellow(), msg),
            (OutputFormat::Human, Level::Info) => println!("{}", msg),
            _ => self.print_json(&json!({ "type": level.tag(), "message": msg })),
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && !self.is_human() {
            return;
        }
        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        let rendered = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(data),
            OutputFormat::Json | OutputFormat::Human => serde_json::to_string(data),
        };
        println!("{}", rendered.unwrap_or_default());
    }

    /// A table of entries in human mode, `{ count, items }` otherwise.
    pub fn media_list(&self, items: &[MediaItem]) {
        if !self.is_human() {
            self.json(&json!({
                "count": items.len(),
                "items": items,
            }));
            return;
        }
        if self.quiet {
            return;
        }
        println!("{}", media_table(items));
    }
}

pub fn media_table(items: &[MediaItem]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(
        ["Kind", "Id", "Title", "Year", "By", "Genres", "Rating"]
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );
    for item in items {
        table.add_row(vec![
            Cell::new(item.kind().to_string()).fg(Color::Cyan),
            Cell::new(item.id()),
            Cell::new(item.title()),
            Cell::new(item.release_year()),
            Cell::new(item.creator_name()),
            Cell::new(item.genres().join(", ")),
            Cell::new(rating_label(item)),
        ]);
    }
    table
}

/// `4.50/5` for rated entries, `-` otherwise.
pub fn rating_label<M: Media>(item: &M) -> String {
    if item.has_reviews() {
        format!("{:.2}/5", item.average_rating())
    } else {
        "-".to_string()
    }
}
