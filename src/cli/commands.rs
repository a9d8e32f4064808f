use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::SearchConfig;
use crate::controller::{LoadStatus, SearchController, SelectionOutcome};
use crate::models::{Record, RecordId};
use crate::search::DEFAULT_RESULT_LIMIT;
use crate::source::{HttpRecordSource, JsonFileSource, RecordSource};
use crate::storage::FileStore;
use crate::tui::{format_timestamp, run_interactive};
use crate::utils::{DATA_DIR_ENV, format_path_with_tilde, get_data_dir, single_line};

/// Environment variable supplying the listing endpoint
pub const SOURCE_URL_ENV: &str = "EVENT_FINDER_SOURCE_URL";
/// Environment variable supplying a local JSON listing
pub const SOURCE_FILE_ENV: &str = "EVENT_FINDER_SOURCE_FILE";

#[derive(Parser)]
#[command(name = "event-finder")]
#[command(version = "0.1.0")]
#[command(about = "Diacritic-insensitive search over event listings", long_about = None)]
pub struct Cli {
    /// HTTP endpoint returning the event listing
    #[arg(long, global = true, env = SOURCE_URL_ENV)]
    pub source_url: Option<String>,

    /// Local JSON file holding the event listing (takes precedence over --source-url)
    #[arg(long, global = true, env = SOURCE_FILE_ENV)]
    pub source_file: Option<PathBuf>,

    /// Directory for persisted search history
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search events by title, description, category or location
    Search {
        /// Text to look for; case and accents are ignored
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },
    /// Show what an empty search box suggests
    Suggest,
    /// Open an event by id, remembering it as a recent selection
    Select {
        /// Event id
        id: String,
    },
    /// List recently selected events
    History,
    /// Forget all recently selected events
    ClearHistory,
    /// Show statistics about the loaded events
    Stats,
    /// Search interactively
    Interactive,
}

/// Parse arguments, install logging, and run the chosen command
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(&cli))),
        )
        .init();

    execute(cli)
}

/// Log filter used when `RUST_LOG` is unset
fn default_log_filter(cli: &Cli) -> &'static str {
    // The alternate screen owns the terminal in interactive mode
    match cli.command {
        Some(Commands::Interactive) => "off",
        _ => "warn",
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Search { query, limit }) => search(&cli, query, *limit),
        Some(Commands::Suggest) => suggest(&cli),
        Some(Commands::Select { id }) => select(&cli, id),
        Some(Commands::History) => show_history(&cli),
        Some(Commands::ClearHistory) => clear_history(&cli),
        Some(Commands::Stats) => show_stats(&cli),
        Some(Commands::Interactive) => interactive(&cli),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

impl Cli {
    fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_data_dir(),
        }
    }

    fn source(&self) -> Result<Option<Box<dyn RecordSource + Send>>> {
        if let Some(path) = &self.source_file {
            if self.source_url.is_some() {
                debug!("both a source file and a source URL were given, using the file");
            }
            return Ok(Some(Box::new(JsonFileSource::new(path))));
        }
        if let Some(url) = &self.source_url {
            let source = HttpRecordSource::new(url.as_str())
                .with_context(|| format!("Failed to set up HTTP source for {}", url))?;
            return Ok(Some(Box::new(source)));
        }
        Ok(None)
    }

    fn controller(&self, config: SearchConfig) -> Result<SearchController> {
        let data_dir = self.data_dir()?;
        let store = FileStore::open(&data_dir).with_context(|| {
            format!("Failed to open data directory {}", format_path_with_tilde(&data_dir))
        })?;
        Ok(SearchController::new(config, Box::new(store)))
    }

    /// Controller with the collection loaded synchronously
    fn loaded_controller(&self, config: SearchConfig) -> Result<SearchController> {
        let mut controller = self.controller(config)?;
        match self.source()? {
            Some(source) => {
                if controller.load(&*source) == LoadStatus::Failed {
                    warn!(source = %source.describe(), "continuing without events");
                }
            }
            None => warn!("no event source configured, use --source-file or --source-url"),
        }
        Ok(controller)
    }
}

fn print_record(record: &Record) {
    println!("{}\t{}", record.id, single_line(&record.title));
}

fn search(cli: &Cli, query: &str, limit: usize) -> Result<()> {
    let config = SearchConfig { result_limit: limit, ..SearchConfig::default() };
    let mut controller = cli.loaded_controller(config)?;

    controller.set_query(query);
    for record in controller.results() {
        print_record(record);
    }

    Ok(())
}

fn suggest(cli: &Cli) -> Result<()> {
    let mut controller = cli.loaded_controller(SearchConfig::default())?;

    controller.open();
    for record in controller.suggestions() {
        print_record(record);
    }

    Ok(())
}

fn select(cli: &Cli, id: &str) -> Result<()> {
    let mut controller = cli.loaded_controller(SearchConfig::default())?;

    match controller.select_by_id(&RecordId::from(id)) {
        Some(SelectionOutcome::Navigate(path)) => println!("{}", path),
        Some(SelectionOutcome::Delivered) => {}
        None => bail!("No event with id {}", id),
    }

    Ok(())
}

fn show_history(cli: &Cli) -> Result<()> {
    let controller = cli.controller(SearchConfig::default())?;
    let entries = controller.history().list();

    if entries.is_empty() {
        println!("No recent selections");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{}\t{}\t{}",
            entry.record.id,
            single_line(&entry.record.title),
            format_timestamp(&entry.selected_at)
        );
    }

    Ok(())
}

fn clear_history(cli: &Cli) -> Result<()> {
    let mut controller = cli.controller(SearchConfig::default())?;
    let count = controller.history().len();
    controller.clear_history()?;

    println!("Cleared {} recent selection(s)", count);
    Ok(())
}

fn show_stats(cli: &Cli) -> Result<()> {
    let controller = cli.loaded_controller(SearchConfig::default())?;
    let config = controller.config();
    let fields: Vec<&str> = config.fields.iter().map(|f| f.name()).collect();

    println!("Event Finder Statistics");
    println!("=======================");
    println!("Total events: {}", controller.records().len());
    println!("Recent selections: {} / {}", controller.history().len(), config.history_capacity);
    println!("Searchable fields: {}", fields.join(", "));
    println!();
    match cli.source()? {
        Some(source) => println!("Source: {}", source.describe()),
        None => println!("Source: none"),
    }
    println!("Data directory: {}", format_path_with_tilde(&cli.data_dir()?));

    Ok(())
}

fn interactive(cli: &Cli) -> Result<()> {
    let mut controller = cli.controller(SearchConfig::default())?;
    match cli.source()? {
        Some(source) => controller.spawn_load(source),
        None => warn!("no event source configured, use --source-file or --source-url"),
    }

    run_interactive(controller)
}
