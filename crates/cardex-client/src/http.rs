use std::time::Duration;

use cardex_core::error::AppError;
use cardex_core::traits::Fetcher;
use reqwest::Client;

/// Plain HTTP fetcher using reqwest.
///
/// No JavaScript runs, so the default listing page comes back as an empty
/// shell through this path. It exists for mirrors and pre-rendered copies
/// of the page, where skipping the browser is considerably faster.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("cardex/0.1 (catalog scraper)")
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Http(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: timeout.as_secs(),
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Http(format!("Failed to read response body: {e}")))
    }
}
