use anyhow::Result;
use lotaipscraper::{fetch, process};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Where downloaded disclosure files land.
static DATA_DIR: &str = "./data/";
/// The unified consolidation output, rebuilt on every run.
static OUTPUT_CSV: &str = "./input/salaries.csv";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) download phase ───────────────────────────────────────────
    info!("downloading salary files from {}", fetch::LISTING_URL);
    let client = Client::new();
    fetch::download_salary_files(&client, fetch::LISTING_URL, DATA_DIR).await?;

    // ─── 3) consolidation phase ──────────────────────────────────────
    process::unify::unify_salary_workbooks(DATA_DIR, OUTPUT_CSV)?;

    info!("all done");
    Ok(())
}
