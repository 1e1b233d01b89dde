//! Local Cuisines - desktop browser for a spreadsheet of regional dishes.
//!
//! Loads the data file once at start-up, then filters, sorts and wish-lists
//! entries in an egui window. `--list` prints the filtered list instead.

use clap::Parser;
use cuisine_explorer::config::{AppConfig, DEFAULT_DATA_FILE};
use cuisine_explorer::models::{MAX_RATING, MIN_RATING};
use cuisine_explorer::{evaluate, format_results, read_cuisines, SortField};
use std::path::PathBuf;

/// Browse, filter and wish-list local cuisines
#[derive(Parser, Debug)]
#[command(name = "cuisine_explorer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Data file with the cuisine records (.xlsx workbook or CSV)
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Directory for downloaded images (default: platform cache directory)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Do not download cuisine images
    #[arg(long, default_value_t = false)]
    no_images: bool,

    /// Initial minimum star rating
    #[arg(long, default_value_t = MAX_RATING,
          value_parser = clap::value_parser!(u8).range(MIN_RATING as i64..=MAX_RATING as i64))]
    min_rating: u8,

    /// Initial specialty search text
    #[arg(long, default_value = "")]
    search: String,

    /// Initial sort field: price, rating or name
    #[arg(long, default_value = "price")]
    sort: SortField,

    /// Print the filtered list to stdout and exit instead of opening a window
    #[arg(long, default_value_t = false)]
    list: bool,
}

impl Args {
    fn into_config(self) -> (AppConfig, bool) {
        let config = AppConfig {
            data_path: self.data,
            image_cache_dir: self.cache_dir,
            load_images: !self.no_images,
            min_rating: self.min_rating,
            specialty_query: self.search,
            sort_field: self.sort,
        };
        (config, self.list)
    }
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=cuisine_explorer=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, list_only) = Args::parse().into_config();
    log::info!("Starting Local Cuisines explorer");
    log::info!("Data file: {}", config.data_path.display());

    if list_only {
        if let Err(e) = print_list(&config) {
            log::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = cuisine_explorer::ui::launch_gui(config) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_list(config: &AppConfig) -> Result<(), cuisine_explorer::LoadError> {
    let table = read_cuisines(&config.data_path)?;
    let spec = config.initial_filter(&table);
    let records: Vec<_> = evaluate(&table, &spec, config.sort_field)
        .into_iter()
        .filter_map(|i| table.get(i))
        .collect();
    println!("{}", format_results(&records));
    Ok(())
}
