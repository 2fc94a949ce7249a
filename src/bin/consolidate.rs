// Rebuild ./input/salaries.csv from ./data/ without touching the network.

use anyhow::Result;
use lotaipscraper::process;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    process::unify::unify_salary_workbooks("./data/", "./input/salaries.csv")
}
