use crate::fetchers::PageFetcher;
use crate::results::{FetchFailureKind, FetchOutcome};
use log::{LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};
use std::time::Duration;

/// Logger that keeps every formatted message, tagged with the thread that emitted it
struct CaptureLogger {
    lines: Mutex<Vec<(ThreadId, String)>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = record.args().to_string();
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((thread::current().id(), line));
        }
    }

    fn flush(&self) {}
}

/// Install the capturing logger. Safe to call from every test.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed in tests");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Messages logged so far by the current thread.
///
/// Each test runs on its own thread and `#[tokio::test]` polls on that thread,
/// so this only sees the calling test's records.
pub fn captured_logs() -> Vec<String> {
    let me = thread::current().id();
    LOGGER
        .lines
        .lock()
        .map(|lines| {
            lines
                .iter()
                .filter(|(id, _)| *id == me)
                .map(|(_, line)| line.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Serves canned outcomes, optionally after a delay, without touching the network
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, (Duration, FetchOutcome)>,
}

impl FakeFetcher {
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            (Duration::ZERO, FetchOutcome::Content(html.to_string())),
        );
        self
    }

    pub fn delayed_page(mut self, url: &str, delay: Duration, html: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            (delay, FetchOutcome::Content(html.to_string())),
        );
        self
    }

    pub fn failing(mut self, url: &str, kind: FetchFailureKind) -> Self {
        self.pages.insert(
            url.to_string(),
            (Duration::ZERO, FetchOutcome::failure(kind, "fake failure")),
        );
        self
    }
}

impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.pages.get(url) {
            Some((delay, outcome)) => {
                tokio::time::sleep(*delay).await;
                outcome.clone()
            }
            None => FetchOutcome::failure(FetchFailureKind::ClientError, "404"),
        }
    }
}

/// A page with both product fields, numbered `n`
pub fn product_page(n: usize) -> String {
    format!(
        "<html><body><span id=\"product_{n}_name\">Product {n}</span>\
         <span id=\"product_{n}_price\">${n}.00</span></body></html>"
    )
}
