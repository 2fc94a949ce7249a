// src/fetch/dirs.rs

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};

/// Anchor text the listing page uses for the link back up the tree.
const PARENT_DIRECTORY_LABEL: &str = "Parent Directory";

/// Fetch the Lotaip index page and return the year-directory names it lists.
///
/// The page is a plain server-generated index: one table row per entry with
/// the entry name as anchor text inside a table cell. Everything except the
/// "Parent Directory" link comes back, in page order. A failed fetch or a
/// non-2xx status propagates and aborts the run.
pub async fn fetch_year_directories(client: &Client, listing_url: &str) -> Result<Vec<String>> {
    let html = client
        .get(listing_url)
        .send()
        .await
        .with_context(|| format!("GET {}", listing_url))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("reading body from {}", listing_url))?;

    Ok(parse_directory_names(&html))
}

/// Extract directory names from listing HTML. Split out from the fetch so
/// the scrape rules can be exercised without a live server.
fn parse_directory_names(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("td a").expect("selector should parse");

    document
        .select(&selector)
        .map(|anchor| anchor.text().collect::<String>())
        .filter(|name| name != PARENT_DIRECTORY_LABEL)
        .collect()
}
