//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit and integration
//! tests. Both mocks hold their canned responses behind `Arc<Mutex<_>>`
//! so cloned handles drain the same queue.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::Product;
use crate::traits::{Extractor, Fetcher};

/// Mock fetcher that returns a configurable response per call.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element; an empty
    /// queue yields a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(html.to_string())])),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, AppError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

/// Mock extractor that returns a configurable record sequence.
#[derive(Clone)]
pub struct MockExtractor {
    responses: Arc<Mutex<Vec<Result<Vec<Product>, AppError>>>>,
}

impl MockExtractor {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(products)])),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
        }
    }
}

impl Extractor for MockExtractor {
    fn products(&self, _html: &str) -> Result<Vec<Product>, AppError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(vec![])
        } else {
            responses.remove(0)
        }
    }
}

/// Create a dummy Product for testing.
pub fn make_test_product() -> Product {
    Product {
        name: "Fortify".to_string(),
        starting_letter: "F".to_string(),
        description: "Static analysis tool".to_string(),
        demo_url: vec!["https://www.microfocus.com/trial/fortify".to_string()],
        support_url: "https://www.microfocus.com/support/fortify".to_string(),
        community_url: String::new(),
    }
}
