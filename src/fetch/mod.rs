// src/fetch/mod.rs

pub mod dirs;
pub mod files;
pub mod names;

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};
use url::Url;

/// Index of monthly Lotaip publications on the Durán municipal site.
pub static LISTING_URL: &str = "https://duran.gob.ec/wp-content/uploads/transparencia/Lotaip/";

/// Sweep every discovered year directory × month and download the salary
/// disclosure for each pair not already on disk.
///
/// Downloads run strictly one at a time in nested-loop order. An individual
/// failure (network, status, write) is logged with its filename and the
/// sweep keeps going; only a failure to fetch the index itself aborts.
pub async fn download_salary_files(
    client: &Client,
    listing_url: &str,
    dest_dir: impl AsRef<Path>,
) -> Result<()> {
    let dest_dir = dest_dir.as_ref();
    fs::create_dir_all(dest_dir)
        .await
        .with_context(|| format!("creating destination directory {:?}", dest_dir))?;
    Url::parse(listing_url).with_context(|| format!("parsing listing URL {}", listing_url))?;

    let directories = dirs::fetch_year_directories(client, listing_url).await?;
    info!("{} year directories discovered", directories.len());

    let planned = files::plan_downloads(listing_url, &directories);
    let pending = files::pending_targets(dest_dir, planned.clone());
    info!(
        planned = planned.len(),
        pending = pending.len(),
        "starting download sweep"
    );

    let mut fetched = 0usize;
    for target in pending {
        match files::download_file(client, &target.url, &target.file_name, dest_dir).await {
            Ok(()) => {
                fetched += 1;
                info!(name = %target.file_name, "downloaded");
            }
            Err(err) => {
                error!(name = %target.file_name, "download failed: {:#}", err);
            }
        }
    }

    info!(fetched, "download sweep complete");
    Ok(())
}
