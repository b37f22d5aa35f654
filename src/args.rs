use clap::{Args as ClapArgs, Parser, Subcommand};
use product_scrape::{ConfigOverrides, ScraperConfig};
use product_scrape::fixture::{DEFAULT_DIR, DEFAULT_PORT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "product-scrape")]
#[command(about = "Fetch product pages concurrently and save their name and price as JSON")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape product pages and write the results to a JSON file
    Scrape(ScrapeArgs),

    /// Serve a directory of static pages for local testing
    Serve(ServeArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ScrapeArgs {
    /// URLs to scrape (defaults to the local fixture pages)
    pub urls: Vec<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (overrides the configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides the configuration)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// Directory containing the pages to serve
    #[arg(short, long, default_value = DEFAULT_DIR)]
    pub dir: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ScrapeArgs {
    /// Build the batch configuration: file (or defaults), then environment, then flags
    pub fn to_config(&self) -> product_scrape::Result<ScraperConfig> {
        let overrides = ConfigOverrides {
            urls: self.urls.clone(),
            output: self.output.clone(),
            timeout_secs: self.timeout,
        };

        ScraperConfig::load(self.config.as_deref(), &overrides)
    }
}
