use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cardex_core::config::ScrapeConfig;
use cardex_core::error::AppError;
use cardex_core::traits::Fetcher;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;

/// Interval between readiness polls while waiting for a selector.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Headless-browser fetcher using Chromium via the Chrome DevTools Protocol.
///
/// The listing page populates its product cards from JavaScript, so a plain
/// HTTP GET returns a shell document. This fetcher renders the page first
/// and returns the resulting DOM as HTML.
///
/// One Chromium process is shared across all clones; each [`Fetcher::fetch`]
/// call opens a tab, captures the rendered HTML, and closes the tab again.
#[derive(Clone)]
pub struct BrowserFetcher {
    browser: Arc<Browser>,
    timeout: Duration,
    wait_for: Option<String>,
}

impl BrowserFetcher {
    /// Launches a Chromium browser according to `config`.
    ///
    /// Honors `config.headless`, `config.timeout`, and `config.wait_for`.
    /// A Chromium/Chrome binary must be reachable via `$CHROME_BIN`, a
    /// well-known install location, or the library's own lookup.
    pub async fn launch(config: &ScrapeConfig) -> Result<Self, AppError> {
        let mut builder = BrowserConfig::builder().no_sandbox().disable_default_args();

        if let Some(bin) = chrome_binary() {
            tracing::info!("Using Chrome binary: {}", bin.display());
            builder = builder.chrome_executable(bin);
        }

        builder = if config.headless {
            builder.arg("--headless=new")
        } else {
            builder.with_head()
        };

        let browser_config = builder
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--no-first-run")
            .build()
            .map_err(|e| AppError::Browser(format!("Invalid browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| AppError::Browser(format!("Failed to launch browser: {e}")))?;

        // The CDP handler must be polled continuously for the connection
        // to stay alive.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    tracing::warn!("Browser CDP handler error: {event:?}");
                    break;
                }
            }
        });

        Ok(Self {
            browser: Arc::new(browser),
            timeout: config.timeout,
            wait_for: config.wait_for.clone(),
        })
    }
}

/// Locates the real Chrome/Chromium binary.
///
/// Snap's `/snap/bin/chromium` wrapper strips unknown CLI flags and breaks
/// headless mode, so the binary buried inside the snap is preferred over
/// the wrapper. An explicit `CHROME_BIN` always wins; if nothing matches,
/// `chromiumoxide` falls back to its own lookup.
fn chrome_binary() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("CHROME_BIN") {
        let path = PathBuf::from(explicit);
        if path.exists() {
            return Some(path);
        }
    }

    [
        "/snap/chromium/current/usr/lib/chromium-browser/chrome",
        "/var/lib/flatpak/exports/bin/org.chromium.Chromium",
        "/usr/bin/google-chrome-stable",
        "/usr/bin/google-chrome",
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.exists())
}

impl Fetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let timeout = self.timeout;

        let result = tokio::time::timeout(timeout, async {
            let page = self
                .browser
                .new_page(url)
                .await
                .map_err(|e| AppError::Http(format!("Failed to navigate to {url}: {e}")))?;

            // Minimal readiness signal: the document has a body.
            page.find_element("body")
                .await
                .map_err(|e| AppError::Http(format!("Page did not render body: {e}")))?;

            // Content injected by late scripts can still be missing at this
            // point. When a readiness selector is configured, poll until it
            // appears; the outer timeout bounds the wait.
            if let Some(selector) = &self.wait_for {
                while page.find_element(selector.as_str()).await.is_err() {
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }

            let html = page
                .content()
                .await
                .map_err(|e| AppError::Http(format!("Failed to read page content: {e}")))?;

            // Close the tab to free browser resources.
            let _ = page.close().await;

            Ok::<String, AppError>(html)
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(_) => Err(AppError::Timeout(timeout.as_secs())),
        }
    }
}
