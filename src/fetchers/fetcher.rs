use crate::results::FetchOutcome;
use std::future::Future;

/// Retrieves the raw content of a single page.
///
/// Implementations never fail outright: every network or timeout problem is
/// reported as a `FetchOutcome::Failure` so one bad URL cannot abort a batch.
pub trait PageFetcher {
    /// Fetch `url` once, without retrying
    fn fetch(&self, url: &str) -> impl Future<Output = FetchOutcome> + Send;
}
