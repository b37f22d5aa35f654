use crate::error::ExtractorError;
use scraper::{ElementRef, Html, Selector};

/// Parses a full HTML document. Malformed markup is repaired, never rejected.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Returns the first element in document order matching `selector`
pub fn first_match<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// Text content of an element with every text node trimmed and empty pieces dropped.
///
/// `<span> Big <b>Box</b> </span>` yields `"BigBox"`: pieces are joined without a
/// separator, the same way a strip-mode `get_text` behaves.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .concat()
}

/// Builds a selector matching elements whose `id` contains `needle`.
///
/// `element` restricts the match to one tag name; `None` matches any element.
pub fn id_contains_selector(
    element: Option<&str>,
    needle: &str,
) -> Result<Selector, ExtractorError> {
    let escaped = needle.replace('\\', "\\\\").replace('"', "\\\"");
    let source = format!("{}[id*=\"{}\"]", element.unwrap_or(""), escaped);

    if needle.is_empty() {
        return Err(ExtractorError {
            selector: source,
            reason: "id substring must not be empty".to_string(),
        });
    }

    let parsed = Selector::parse(&source).map_err(|e| e.to_string());
    parsed.map_err(|reason| ExtractorError {
        selector: source,
        reason,
    })
}
