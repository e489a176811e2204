//! Job Crawler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use job_crawler::{
    error::Result,
    models::{Config, SiteConfig},
    pipeline,
    services::PageCrawler,
    storage::CsvWriter,
    utils::http::HttpFetcher,
};

/// Job Crawler - search result listing exporter
#[derive(Parser, Debug)]
#[command(
    name = "job-crawler",
    version,
    about = "Crawls job search results and exports listings to CSV"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl every results page and write the listings file (default)
    Crawl {
        /// Output file (default: output.path from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Only discover how many results pages there are
    Pages,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(cli.verbose, &config.logging.level);
    if let Some(e) = load_error {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
    }

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Option<Command>, mut config: Config) -> Result<()> {
    let site = Arc::new(SiteConfig::default());

    match command.unwrap_or(Command::Crawl { output: None }) {
        Command::Crawl { output } => {
            if let Some(path) = output {
                config.output.path = path.display().to_string();
            }
            config.validate()?;

            let fetcher = Arc::new(HttpFetcher::from_config(&config.crawler)?);
            let writer = CsvWriter::new(&config.output.path, &site.detail_url);

            log::info!("Job crawler starting...");
            let stats = pipeline::run_crawler(&config, site, fetcher, &writer).await?;
            println!("Done, extracted {}", stats.listing_count);
        }

        Command::Pages => {
            config.validate()?;
            let fetcher = Arc::new(HttpFetcher::from_config(&config.crawler)?);
            let pages = PageCrawler::new(fetcher, site)?;

            let count = pages.discover_page_count().await?;
            println!("{count} page(s)");
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
