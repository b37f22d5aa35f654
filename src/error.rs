use thiserror::Error;

/// Failure to load a scraper configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to build a product extractor from its configuration
#[derive(Debug, Error)]
#[error("Invalid selector `{selector}`: {reason}")]
pub struct ExtractorError {
    pub selector: String,
    pub reason: String,
}

/// Failure to persist a scrape result. Always fatal for the batch.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for a batch run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
