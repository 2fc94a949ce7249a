// Print the year directories currently listed on the Lotaip index.

use anyhow::Result;
use lotaipscraper::fetch;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let client = Client::new();
    let directories = fetch::dirs::fetch_year_directories(&client, fetch::LISTING_URL).await?;
    for directory in directories {
        println!("{}", directory);
    }
    Ok(())
}
