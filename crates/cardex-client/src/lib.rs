pub mod browser;
pub mod extract;
pub mod http;

pub use browser::BrowserFetcher;
pub use extract::CardExtractor;
pub use http::HttpFetcher;
