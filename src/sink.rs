use crate::error::SinkError;
use crate::results::{ExtractedRecord, ScrapeResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Serialize the records of `result` as an indented JSON array.
///
/// URLs are not part of the output; each entry is `{"name": .., "price": ..}`
/// with missing fields written as `null`. Non-ASCII text is kept as UTF-8.
pub fn to_json(result: &ScrapeResult) -> Result<Vec<u8>, SinkError> {
    // Drop the URLs, keep the order
    let records: Vec<&ExtractedRecord> = result.records().collect();

    // Four-space indentation
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;

    Ok(buf)
}

/// Write `result` to `destination`, replacing any existing file.
///
/// The document is built in memory first and written with a single call, so
/// serialization problems never leave a partial file behind.
pub fn persist(result: &ScrapeResult, destination: impl AsRef<Path>) -> Result<(), SinkError> {
    let destination = destination.as_ref();
    // Serialize before touching the file
    let json = to_json(result)?;
    std::fs::write(destination, json)?;

    ::log::debug!(
        "Wrote {} records to {}",
        result.len(),
        destination.display()
    );
    Ok(())
}
