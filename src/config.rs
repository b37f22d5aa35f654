use crate::error::{self, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the output path
pub const OUTPUT_ENV_VAR: &str = "PRODUCT_SCRAPE_OUTPUT";

/// Configuration for one scrape batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URLs to fetch, in the order results should be reported
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// File the aggregate is written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional User-Agent header sent with every request
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Field lookup settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Values given on the command line. Unset fields keep the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub urls: Vec<String>,
    pub output: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Configuration for the product field lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Substring an element id must contain to be read as the product name
    #[serde(default = "default_name_id")]
    pub name_id: String,

    /// Substring an element id must contain to be read as the price
    #[serde(default = "default_price_id")]
    pub price_id: String,

    /// Restrict lookups to one element tag (e.g. "span"). Any element when unset.
    #[serde(default)]
    pub element: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            name_id: default_name_id(),
            price_id: default_price_id(),
            element: None,
        }
    }
}

/// Pages served by the local fixture server
fn default_urls() -> Vec<String> {
    (1..=3)
        .map(|n| format!("http://localhost:8080/e_com_page_{}.html", n))
        .collect()
}

fn default_output() -> PathBuf {
    PathBuf::from("products.json")
}

/// Matches the total timeout of a default aiohttp-style client session
fn default_timeout_secs() -> u64 {
    300
}

fn default_name_id() -> String {
    "name".to_string()
}

fn default_price_id() -> String {
    "price".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            output: default_output(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Configuration for an explicit list of URLs, everything else defaulted
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Build the batch configuration from a file (or the defaults), the
    /// `PRODUCT_SCRAPE_OUTPUT` environment variable, then `overrides`, each
    /// later source winning over the earlier ones.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> error::Result<Self> {
        let env_output = std::env::var(OUTPUT_ENV_VAR).ok();
        Self::load_with_env(path, env_output, overrides)
    }

    /// Same as [`ScraperConfig::load`] with the environment value passed in
    pub fn load_with_env(
        path: Option<&Path>,
        env_output: Option<String>,
        overrides: &ConfigOverrides,
    ) -> error::Result<Self> {
        // File first, defaults when there is none
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        // Environment beats the file; an empty value counts as unset
        if let Some(output) = env_output.filter(|o| !o.is_empty()) {
            config.output = PathBuf::from(output);
        }

        // Command-line values beat everything
        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Replace every value that `overrides` sets
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if !overrides.urls.is_empty() {
            self.urls = overrides.urls.clone();
        }
        if let Some(output) = &overrides.output {
            self.output = output.clone();
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
