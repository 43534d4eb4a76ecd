use std::path::PathBuf;
use std::time::Duration;

/// Listing page the tool was built for.
pub const DEFAULT_INPUT_URL: &str = "https://www.microfocus.com/en-us/products?trial=true";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "products.json";

/// Runtime configuration for one scrape run.
///
/// Passed explicitly into the fetcher and pipeline instead of living in
/// process-wide globals, so tests and embedders can construct their own.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Page to fetch.
    pub input_url: String,
    /// Where the JSON product array lands.
    pub output_path: PathBuf,
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Upper bound on navigation plus rendering.
    pub timeout: Duration,
    /// Optional CSS selector to poll for before capturing the page.
    /// `None` captures as soon as the document body exists.
    pub wait_for: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            input_url: DEFAULT_INPUT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            headless: true,
            timeout: Duration::from_secs(30),
            wait_for: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_constants() {
        let config = ScrapeConfig::default();
        assert_eq!(config.input_url, DEFAULT_INPUT_URL);
        assert_eq!(config.output_path, PathBuf::from("products.json"));
        assert!(config.headless);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.wait_for.is_none());
    }
}
