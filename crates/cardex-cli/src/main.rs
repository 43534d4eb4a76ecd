use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardex_client::{BrowserFetcher, CardExtractor, HttpFetcher};
use cardex_core::config::{DEFAULT_INPUT_URL, DEFAULT_OUTPUT_PATH, ScrapeConfig};
use cardex_core::models::Product;
use cardex_core::{Catalog, Fetcher};

#[derive(Parser)]
#[command(
    name = "cardex",
    version,
    about = "Scrapes a JS-rendered product listing into a JSON file"
)]
struct Cli {
    /// Listing page to scrape
    #[arg(short, long, env = "CARDEX_URL", default_value = DEFAULT_INPUT_URL)]
    url: String,

    /// Output file for the JSON product array
    #[arg(short, long, env = "CARDEX_OUT", default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Show the browser window instead of running headless
    #[arg(long, default_value_t = false)]
    headed: bool,

    /// Navigation timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// CSS selector to poll for before capturing the page
    /// (e.g. "div.uk-card" to outlast late-loading scripts)
    #[arg(long)]
    wait_for: Option<String>,

    /// Fetch with a plain HTTP GET instead of a headless browser.
    /// Only useful for pages that render without JavaScript.
    #[arg(long, default_value_t = false)]
    no_browser: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cardex=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ScrapeConfig {
        input_url: cli.url,
        output_path: cli.out,
        headless: !cli.headed,
        timeout: Duration::from_secs(cli.timeout),
        wait_for: cli.wait_for,
    };

    let products = if cli.no_browser {
        let fetcher = HttpFetcher::new(config.timeout)?;
        run(fetcher, &config).await?
    } else {
        let fetcher = BrowserFetcher::launch(&config).await?;
        run(fetcher, &config).await?
    };

    println!(
        "Wrote {} products to {}",
        products.len(),
        config.output_path.display()
    );

    Ok(())
}

async fn run<F: Fetcher>(fetcher: F, config: &ScrapeConfig) -> Result<Vec<Product>> {
    let catalog = Catalog::new(fetcher, CardExtractor::new());
    Ok(catalog.run(config).await?)
}
