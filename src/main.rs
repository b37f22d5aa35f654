use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;

mod args;
use args::{Args, Command, ScrapeArgs, ServeArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging, showing per-page diagnostics unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Command::Scrape(scrape) => run_scrape(scrape).await,
        Command::Serve(serve) => run_serve(serve).await,
    }
}

async fn run_scrape(args: ScrapeArgs) -> Result<(), Box<dyn Error>> {
    let config = args.to_config()?;

    let start_time = std::time::Instant::now();
    let summary = product_scrape::run_batch(&config).await?;

    ::log::info!(
        "Scraped {} of {} pages in {:.2} seconds",
        summary.result.len(),
        summary.attempted,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    product_scrape::fixture::bind_and_serve(addr, &args.dir).await?;
    Ok(())
}
