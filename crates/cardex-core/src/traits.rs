use std::future::Future;

use crate::error::AppError;
use crate::models::Product;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns rendered HTML into an ordered sequence of product records.
///
/// Implementations own both halves of the work: selecting the card
/// containers and reading the fields out of each one.
pub trait Extractor: Send + Sync + Clone {
    fn products(&self, html: &str) -> Result<Vec<Product>, AppError>;
}
