use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a single fetch did not produce page content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    /// Transport or HTTP failure, including non-success status codes
    ClientError,
    /// The request did not complete within the configured timeout
    Timeout,
    /// Anything the transport could not classify
    Unexpected,
}

impl fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchFailureKind::ClientError => "client error",
            FetchFailureKind::Timeout => "timeout",
            FetchFailureKind::Unexpected => "unexpected error",
        };
        f.write_str(label)
    }
}

/// A failed fetch, with a message suitable for the operator console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FetchFailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FetchFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Result of fetching one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Raw body text of the page
    Content(String),
    Failure(FetchFailure),
}

impl FetchOutcome {
    pub fn failure(kind: FetchFailureKind, message: impl Into<String>) -> Self {
        FetchOutcome::Failure(FetchFailure::new(kind, message))
    }

    /// Page content, if the fetch succeeded
    pub fn content(&self) -> Option<&str> {
        match self {
            FetchOutcome::Content(body) => Some(body),
            FetchOutcome::Failure(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failure(_))
    }
}

/// Product fields pulled out of a page. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl ExtractedRecord {
    pub fn new(name: Option<String>, price: Option<String>) -> Self {
        Self { name, price }
    }

    /// True when neither field was found
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

impl fmt::Display for ExtractedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(value: &Option<String>) -> String {
            match value {
                Some(v) => format!("'{}'", v),
                None => "None".to_string(),
            }
        }
        write!(
            f,
            "{{'name': {}, 'price': {}}}",
            field(&self.name),
            field(&self.price)
        )
    }
}

/// A record together with the URL it was scraped from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedProduct {
    pub url: String,
    pub record: ExtractedRecord,
}

/// Ordered aggregate of one batch. Entries keep the relative order of the input URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeResult {
    entries: Vec<ScrapedProduct>,
}

impl ScrapeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: impl Into<String>, record: ExtractedRecord) {
        self.entries.push(ScrapedProduct {
            url: url.into(),
            record,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScrapedProduct] {
        &self.entries
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.url.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &ExtractedRecord> {
        self.entries.iter().map(|e| &e.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display_matches_console_format() {
        let record = ExtractedRecord::new(Some("Test Product".into()), None);
        assert_eq!(
            record.to_string(),
            "{'name': 'Test Product', 'price': None}"
        );
    }

    #[test]
    fn test_record_serializes_missing_fields_as_null() {
        let record = ExtractedRecord::new(None, Some("$5".into()));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":null,"price":"$5"}"#);
    }

    #[test]
    fn test_outcome_content_accessor() {
        let ok = FetchOutcome::Content("<html></html>".into());
        assert_eq!(ok.content(), Some("<html></html>"));
        assert!(!ok.is_failure());

        let failed = FetchOutcome::failure(FetchFailureKind::Timeout, "slow");
        assert_eq!(failed.content(), None);
        assert!(failed.is_failure());
        assert_eq!(
            failed,
            FetchOutcome::Failure(FetchFailure::new(FetchFailureKind::Timeout, "slow"))
        );
    }

    #[test]
    fn test_result_keeps_insertion_order() {
        let mut result = ScrapeResult::new();
        result.push("a", ExtractedRecord::new(Some("A".into()), None));
        result.push("b", ExtractedRecord::new(None, Some("1".into())));
        assert_eq!(result.len(), 2);
        assert_eq!(result.urls().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
