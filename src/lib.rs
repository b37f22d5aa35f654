pub mod config;
pub mod error;
pub mod fetchers;
pub mod fixture;
pub mod parsers;
pub mod results;
pub mod scrape;
pub mod sink;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::{ConfigOverrides, ExtractorConfig, ScraperConfig};
pub use error::{ConfigError, Result, ScrapeError};
pub use fetchers::{HttpFetcher, PageFetcher};
pub use parsers::ProductExtractor;
pub use results::{
    ExtractedRecord, FetchFailure, FetchFailureKind, FetchOutcome, ScrapeResult, ScrapedProduct,
};
pub use scrape::Scraper;

use std::path::{Path, PathBuf};

/// What a finished batch produced
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Number of URLs in the batch
    pub attempted: usize,
    /// Records that were extracted, in input order
    pub result: ScrapeResult,
    /// Where the records were written, if anything was written
    pub saved_to: Option<PathBuf>,
}

/// Run a batch over HTTP as described by `config`.
///
/// The output file is only written when at least one record was extracted.
pub async fn run_batch(config: &ScraperConfig) -> Result<BatchSummary> {
    let fetcher = HttpFetcher::from_config(config)?;
    let extractor = ProductExtractor::new(&config.extractor)?;

    run_batch_with(fetcher, extractor, config.urls.as_slice(), &config.output).await
}

/// Run a batch with an arbitrary fetcher
pub async fn run_batch_with<F, S>(
    fetcher: F,
    extractor: ProductExtractor,
    urls: &[S],
    output: &Path,
) -> Result<BatchSummary>
where
    F: PageFetcher,
    S: AsRef<str>,
{
    ::log::info!("Scraping {} pages", urls.len());

    let scraper = Scraper::new(fetcher, extractor);
    let result = scraper.run(urls).await;

    // Only claim a save when there was something to save
    let saved_to = if result.is_empty() {
        ::log::info!("No product data extracted, nothing saved");
        None
    } else {
        sink::persist(&result, output)?;
        ::log::info!("Data is saved to {}.", output.display());
        Some(output.to_path_buf())
    };

    Ok(BatchSummary {
        attempted: urls.len(),
        result,
        saved_to,
    })
}
