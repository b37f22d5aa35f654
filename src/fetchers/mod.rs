pub mod fetcher;
pub mod http;

pub use fetcher::PageFetcher;
pub use http::HttpFetcher;
