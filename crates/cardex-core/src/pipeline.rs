use crate::config::ScrapeConfig;
use crate::error::AppError;
use crate::models::{Product, write_products};
use crate::traits::{Extractor, Fetcher};

/// Orchestrates the full run: fetch → extract → write.
///
/// Generic over the fetcher and extractor via traits, enabling dependency
/// injection and testing without a live browser.
pub struct Catalog<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    fetcher: F,
    extractor: E,
}

impl<F, E> Catalog<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// Runs the pipeline against `config.input_url` and writes the JSON
    /// product array to `config.output_path`.
    ///
    /// A failure at any stage aborts the whole run; no partial output file
    /// is produced. Returns the extracted records on success.
    pub async fn run(&self, config: &ScrapeConfig) -> Result<Vec<Product>, AppError> {
        tracing::info!("Fetching {}", config.input_url);
        let html = self.fetcher.fetch(&config.input_url).await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        let products = self.extractor.products(&html)?;
        tracing::info!("Extracted {} products", products.len());

        write_products(&config.output_path, &products)?;
        tracing::info!("Wrote {}", config.output_path.display());

        Ok(products)
    }
}
