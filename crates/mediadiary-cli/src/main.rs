use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::entry::EntryArgs;
use commands::{add, edit, list, remove, review, search, show};
use mediadiary_config::{Config, PathManager};
use mediadiary_core::{Library, SortOrder};
use mediadiary_models::MediaKind;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "mediadiary")]
#[command(about = "MediaDiary - a personal catalog of books, movies and series")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries with optional filters and ordering
    #[command(long_about = "List entries of one kind (or all kinds). The genre filter matches any genre containing the text, case-insensitively; the year filter keeps exact release years. Sorting by rating only ranks entries that were read/watched and reviewed.")]
    List {
        /// Only this kind: book, movie or series
        #[arg(long)]
        kind: Option<MediaKind>,

        /// Keep entries with a genre containing this text
        #[arg(long)]
        genre: Option<String>,

        /// Keep entries released in this year (0 disables the filter)
        #[arg(long)]
        year: Option<i32>,

        /// Ordering: none, best or worst
        #[arg(long, default_value = "none")]
        sort: SortOrder,
    },
    /// Add a book, movie or series
    #[command(long_about = "Add a book, movie or series. --title and --year are required; other flags depend on the kind. Series seasons are given as N:EPISODES:YEAR, e.g. --season 1:10:2017 --season 2:8:2019.")]
    Add {
        kind: MediaKind,

        #[command(flatten)]
        fields: EntryArgs,
    },
    /// Change fields of an existing entry
    Edit {
        kind: MediaKind,
        id: u64,

        #[command(flatten)]
        fields: EntryArgs,

        /// Remove a season by number (series only, repeat for several)
        #[arg(long = "drop-season", value_name = "N")]
        drop_seasons: Vec<u32>,
    },
    /// Search titles, creators, ISBNs, genres and years
    Search {
        /// Text to look for (empty lists everything)
        #[arg(default_value = "")]
        criteria: String,

        /// Only this kind: book, movie or series
        #[arg(long)]
        kind: Option<MediaKind>,
    },
    /// Show one entry with its review history
    Show {
        kind: MediaKind,
        id: u64,

        /// How many of the most recent reviews to show
        #[arg(long, default_value_t = 5)]
        history: usize,
    },
    /// Add a review (0-5) to a book or movie, or to a season of a series
    Review {
        kind: MediaKind,
        id: u64,

        #[arg(long, allow_negative_numbers = true)]
        rating: i64,

        #[arg(long, default_value = "")]
        comment: String,

        /// Season number (series only)
        #[arg(long)]
        season: Option<u32>,
    },
    /// Remove an entry from its catalog
    Remove {
        kind: MediaKind,
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the active configuration and file locations
    Show,
    /// Write a default config file if none exists
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| eyre!("Failed to load {}: {}", path_manager.config_file().display(), e))?;
    config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    if let Commands::Config { cmd } = &cli.command {
        return match cmd {
            ConfigCommands::Show => commands::config::show_config(&path_manager, &config, &output),
            ConfigCommands::Init { force } => commands::config::init_config(&path_manager, *force, &output),
        };
    }

    let path_manager = path_manager.with_data_dir(&config.data_dir);
    tracing::debug!("Catalogs live in {:?}", path_manager.data_dir());
    let mut library = Library::open(&path_manager, config.validation.year_bounds());

    let result = match cli.command {
        Commands::List { kind, genre, year, sort } => list::run_list(&library, kind, genre, year, sort, &output),
        Commands::Add { kind, fields } => add::run_add(&mut library, kind, &fields, &output).map(|_| ()),
        Commands::Edit { kind, id, fields, drop_seasons } => {
            edit::run_edit(&mut library, kind, id, &fields, &drop_seasons, &output)
        }
        Commands::Search { criteria, kind } => search::run_search(&library, &criteria, kind, &output),
        Commands::Show { kind, id, history } => show::run_show(&library, kind, id, history, &output),
        Commands::Review { kind, id, rating, comment, season } => {
            review::run_review(&mut library, kind, id, rating, &comment, season, &output)
        }
        Commands::Remove { kind, id, yes } => remove::run_remove(&mut library, kind, id, yes, &output),
        Commands::Config { .. } => Ok(()),
    };

    // JSON consumers get the failure on stdout as well; the report still sets the exit code
    if let Err(e) = &result {
        if !output.is_human() {
            output.error(e.to_string());
        }
    }
    result
}
