use std::sync::LazyLock;

use cardex_core::error::AppError;
use cardex_core::models::Product;
use cardex_core::traits::Extractor;
use scraper::{ElementRef, Html, Selector};

/// Domain prepended to root-relative links found on the listing page.
const SITE_ROOT: &str = "https://www.microfocus.com";

static CARD: LazyLock<Selector> = LazyLock::new(|| sel("div.uk-card"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("h3.uk-card-title"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| sel("p"));
static CTA: LazyLock<Selector> = LazyLock::new(|| sel("div.cta-section"));
static FOOTER: LazyLock<Selector> = LazyLock::new(|| sel("div.footer"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| sel("a"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Extracts product records from the rendered listing page.
///
/// Each `div.uk-card` container yields one record. Cards are processed in
/// document order, and the first malformed card aborts the whole pass.
#[derive(Debug, Clone, Default)]
pub struct CardExtractor;

impl CardExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for CardExtractor {
    fn products(&self, html: &str) -> Result<Vec<Product>, AppError> {
        let doc = Html::parse_document(html);
        doc.select(&CARD).map(extract_card).collect()
    }
}

fn extract_card(card: ElementRef<'_>) -> Result<Product, AppError> {
    let name = text_of(required(card, &TITLE, "h3.uk-card-title")?);
    let description = text_of(required(card, &PARAGRAPH, "p")?);

    // Demo links live in the call-to-action block. A card without one
    // simply has no demo or trial to offer.
    let mut demo_url = Vec::new();
    if let Some(cta) = card.select(&CTA).next() {
        for link in cta.select(&ANCHOR) {
            let label = label_of(link, "cta-section")?;
            if label.contains("demo") || label.contains("free trial") {
                let href = link.value().attr("href").ok_or_else(|| {
                    AppError::MissingAttr(format!("href on cta-section link \"{label}\""))
                })?;
                demo_url.push(globalize(href));
            }
        }
    }

    // Support and community links sit in the card footer. The two branches
    // are exclusive per link: a label matching both keywords only ever
    // populates support_url. Last match wins within each branch.
    let mut support_url = String::new();
    let mut community_url = String::new();
    if let Some(footer) = card.select(&FOOTER).next() {
        for link in footer.select(&ANCHOR) {
            let label = label_of(link, "footer")?;
            let href = link.value().attr("href");
            if label.contains("support")
                && let Some(href) = href
            {
                support_url = globalize(href);
            } else if label.contains("community")
                && let Some(href) = href
            {
                community_url = globalize(href);
            }
        }
    }

    Product::new(name, description, demo_url, support_url, community_url)
}

/// First descendant matching `selector`, or a typed missing-element error.
fn required<'a>(
    card: ElementRef<'a>,
    selector: &Selector,
    what: &str,
) -> Result<ElementRef<'a>, AppError> {
    card.select(selector)
        .next()
        .ok_or_else(|| AppError::MissingElement(format!("{what} under product card")))
}

/// Concatenated text nodes, untrimmed.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Lowercased link label, used for keyword classification.
///
/// A link with no text at all cannot be classified and fails the card.
fn label_of(link: ElementRef<'_>, region: &str) -> Result<String, AppError> {
    let label = text_of(link);
    if label.is_empty() {
        return Err(AppError::MissingText(format!("<a> in {region} has no label")));
    }
    Ok(label.to_lowercase())
}

/// Converts a root-relative link into an absolute one.
///
/// Already-absolute URLs and `mailto:` links pass through untouched.
pub fn globalize(link: &str) -> String {
    if link.starts_with('/') {
        format!("{SITE_ROOT}{link}")
    } else {
        link.to_string()
    }
}
