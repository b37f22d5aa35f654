use crate::fetchers::PageFetcher;
use crate::parsers::ProductExtractor;
use crate::results::{FetchOutcome, ScrapeResult};
use futures::future::join_all;

/// Drives a batch of URLs through fetching and extraction.
///
/// All fetches run concurrently on the caller's task; extraction happens
/// afterwards, one URL at a time, in input order.
pub struct Scraper<F> {
    fetcher: F,
    extractor: ProductExtractor,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, extractor: ProductExtractor) -> Self {
        Self { fetcher, extractor }
    }

    /// Fetch every URL concurrently, returning one outcome per URL in input order.
    ///
    /// A failed fetch never cancels the others; this resolves once the slowest
    /// fetch has finished.
    pub async fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<FetchOutcome> {
        let tasks = urls.iter().map(|url| self.fetcher.fetch(url.as_ref()));
        join_all(tasks).await
    }

    /// Run one batch and return the records that could be extracted
    pub async fn run<S: AsRef<str>>(&self, urls: &[S]) -> ScrapeResult {
        // Fetch every page before looking at any of them
        ::log::debug!("Launching {} fetches", urls.len());
        let outcomes = self.fetch_all(urls).await;

        // Outcomes line up with the input, so walking them in order keeps the result ordered
        let mut result = ScrapeResult::new();
        for (url, outcome) in urls.iter().zip(outcomes) {
            let url: &str = url.as_ref();

            // An empty body is reported like a failed fetch
            let Some(content) = outcome.content().filter(|c| !c.is_empty()) else {
                ::log::warn!("Failed to fetch {}", url);
                continue;
            };

            // Keep the record unless both fields are missing
            match self.extractor.extract(Some(content)) {
                Some(record) if !record.is_empty() => {
                    ::log::info!("URL: {}", url);
                    ::log::info!("Product Info: {}", record);
                    ::log::info!("---");
                    result.push(url, record);
                }
                _ => ::log::warn!("Failed to parse data from {}", url),
            }
        }

        ::log::debug!("Extracted {} of {} pages", result.len(), urls.len());
        result
    }
}
