use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parsers::html;
use crate::results::ExtractedRecord;
use scraper::{Html, Selector};

/// Pulls the product name and price out of a page.
///
/// Each field is the stripped text of the first element whose `id` contains the
/// configured substring. The two lookups are independent: a page may yield a
/// name without a price, a price without a name, or neither.
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    name_selector: Selector,
    price_selector: Selector,
}

impl ProductExtractor {
    /// Create an extractor from its configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let element = config.element.as_deref();
        Ok(Self {
            name_selector: html::id_contains_selector(element, &config.name_id)?,
            price_selector: html::id_contains_selector(element, &config.price_id)?,
        })
    }

    /// Extract a record from page content.
    ///
    /// Returns `None` only when there is no content to look at. Any non-empty
    /// input yields a record, possibly with both fields missing.
    pub fn extract(&self, content: Option<&str>) -> Option<ExtractedRecord> {
        let content = content.filter(|c| !c.is_empty())?;
        let doc = html::parse_document(content);

        let record = ExtractedRecord {
            name: Self::lookup(&doc, &self.name_selector),
            price: Self::lookup(&doc, &self.price_selector),
        };

        ::log::debug!(
            "Extractor found name: {}, price: {}",
            record.name.is_some(),
            record.price.is_some()
        );

        Some(record)
    }

    fn lookup(doc: &Html, selector: &Selector) -> Option<String> {
        html::first_match(doc, selector).map(html::stripped_text)
    }
}

impl Default for ProductExtractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default()).expect("Default selectors should be valid")
    }
}
