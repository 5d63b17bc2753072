//! CLI entry point for the bikeshare trip statistics tool.
//!
//! Loads one city's trip log, narrows it to a month and weekday, and prints
//! travel-time, station, duration and rider statistics.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bikeshare_stats::config::SourceConfig;
use bikeshare_stats::dataset::load;
use bikeshare_stats::output::{print_json, render_text, write_records};
use bikeshare_stats::sampler::{SAMPLE_SIZE, sample};
use bikeshare_stats::selection::{City, DayFilter, FilterCriteria, MonthFilter};
use bikeshare_stats::stats::TripReport;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics for US bikeshare trip logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Directory holding the city CSVs (defaults to $BIKESHARE_DATA_DIR or ".")
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file mapping city names to CSV file names
    #[arg(long, value_name = "FILE")]
    sources: Option<PathBuf>,
}

impl SourceArgs {
    fn into_config(self) -> Result<SourceConfig> {
        let config = match self.data_dir {
            Some(dir) => SourceConfig::new(dir),
            None => SourceConfig::from_env(),
        };
        match self.sources {
            Some(path) => Ok(config.with_overrides_file(path)?),
            None => Ok(config),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print trip statistics for a city, optionally filtered by month and day
    Analyze {
        /// chicago, "new york city" or washington
        #[arg(value_name = "CITY")]
        city: City,

        /// january through june, or all
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// monday through sunday, or all
        #[arg(short, long, default_value = "all")]
        day: DayFilter,

        #[command(flatten)]
        source: SourceArgs,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Number of raw-data pages (5 random trips each) to print after the report
        #[arg(short, long, default_value_t = 0)]
        raw_pages: usize,

        /// Seed for raw-data sampling
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List supported cities and where their trip data is expected
    ListCities {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // span close events carry each report generator's elapsed time
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            source,
            json,
            raw_pages,
            seed,
        } => {
            let config = source.into_config()?;
            let criteria = FilterCriteria::new(month, day);
            analyze(&config, city, criteria, json, raw_pages, seed)?;
        }
        Commands::ListCities { source } => {
            let config = source.into_config()?;
            for city in City::ALL {
                let path = config.resolve(city);
                info!(
                    city = %city,
                    path = %path.display(),
                    available = path.exists(),
                    "City"
                );
            }
        }
    }

    Ok(())
}

/// Runs one load, filter and report cycle for `city`.
#[tracing::instrument(skip(config), fields(city = %city, month = %criteria.month, day = %criteria.day))]
fn analyze(
    config: &SourceConfig,
    city: City,
    criteria: FilterCriteria,
    json: bool,
    raw_pages: usize,
    seed: Option<u64>,
) -> Result<()> {
    let dataset = load(config, city)
        .with_context(|| format!("Failed to load trip data for {city}"))?;
    let filtered = dataset.filter(&criteria);
    info!(
        loaded = dataset.len(),
        matching = filtered.len(),
        "Trips selected"
    );

    let report = TripReport::build(&filtered, criteria);
    if json {
        print_json(&report)?;
    } else {
        print!("{}", render_text(&report));
    }

    if raw_pages > 0 {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for page in 1..=raw_pages {
            let rows = sample(&filtered, SAMPLE_SIZE, &mut rng);
            println!("\nRaw data sample {page}/{raw_pages}:");
            write_records(&rows, std::io::stdout().lock())?;
        }
    }

    Ok(())
}
