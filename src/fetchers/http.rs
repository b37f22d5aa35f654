use crate::config::ScraperConfig;
use crate::fetchers::PageFetcher;
use crate::results::{FetchFailureKind, FetchOutcome};
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;

/// Fetches pages with a single HTTP GET each
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::build(timeout, None)
    }

    /// Create a fetcher from the batch configuration
    pub fn from_config(config: &ScraperConfig) -> Result<Self, reqwest::Error> {
        Self::build(config.timeout(), config.user_agent.as_deref())
    }

    fn build(timeout: Duration, user_agent: Option<&str>) -> Result<Self, reqwest::Error> {
        // Every request shares one client and one timeout
        let mut builder = Client::builder().timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
        })
    }

    /// Issues the request and reads the body. Non-success statuses are errors.
    async fn get(&self, url: &str) -> Result<String, reqwest::Error> {
        // Send the request; a 4xx or 5xx counts as a failed fetch
        let response = self.client.get(url).send().await?.error_for_status()?;

        // Read the whole body as text
        response.text().await
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        ::log::debug!("GET {}", url);

        // The client enforces the same limit; this guard also covers a stalled body read
        match timeout(self.timeout, self.get(url)).await {
            Ok(Ok(body)) => {
                ::log::debug!("Fetched {} ({} bytes)", url, body.len());
                FetchOutcome::Content(body)
            }
            // Transport failure, sorted into the failure kinds
            Ok(Err(e)) => {
                let kind = classify(&e);
                log_failure(kind, url, &e);
                FetchOutcome::failure(kind, e.to_string())
            }
            // Outer guard fired
            Err(_) => {
                log_failure(FetchFailureKind::Timeout, url, "request timed out");
                FetchOutcome::failure(
                    FetchFailureKind::Timeout,
                    format!("no response within {:.1} seconds", self.timeout.as_secs_f64()),
                )
            }
        }
    }
}

/// Maps a transport error onto the failure taxonomy
fn classify(error: &reqwest::Error) -> FetchFailureKind {
    if error.is_timeout() {
        FetchFailureKind::Timeout
    } else if error.is_connect()
        || error.is_status()
        || error.is_request()
        || error.is_body()
        || error.is_decode()
        || error.is_redirect()
        || error.is_builder()
    {
        FetchFailureKind::ClientError
    } else {
        FetchFailureKind::Unexpected
    }
}

fn log_failure(kind: FetchFailureKind, url: &str, detail: impl std::fmt::Display) {
    match kind {
        FetchFailureKind::ClientError => {
            ::log::error!("Client error occurred while fetching {}: {}", url, detail)
        }
        FetchFailureKind::Timeout => {
            ::log::error!("Timeout occurred while fetching {}", url)
        }
        FetchFailureKind::Unexpected => {
            ::log::error!("An unexpected error occurred while fetching {}: {}", url, detail)
        }
    }
}
