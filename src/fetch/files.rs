// src/fetch/files.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tokio::fs;

use super::names::{self, MONTHS};

/// One planned fetch: the remote URL and the local filename to store it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub file_name: String,
    pub url: String,
}

/// Build the full sweep plan: every discovered directory crossed with the
/// twelve months, in that nested order. The year is the first four bytes of
/// the directory name; a shorter or oddly-encoded name falls back to the
/// whole name, and the resulting fetch fails per-file instead of aborting.
pub fn plan_downloads(listing_url: &str, directories: &[String]) -> Vec<DownloadTarget> {
    let mut targets = Vec::with_capacity(directories.len() * MONTHS.len());
    for directory in directories {
        let year = year_prefix(directory);
        for &month in MONTHS {
            let file_name = format!("{}_{}.pdf", year, month);
            let remote_name = names::remote_filename(&file_name);
            // Index anchor text ends in '/', so the directory segment
            // already carries its separator.
            let url = format!("{}{}{}/{}", listing_url, directory, month, remote_name);
            targets.push(DownloadTarget { file_name, url });
        }
    }
    targets
}

/// Drop every target whose local file already exists. A file on disk is
/// never fetched again.
pub fn pending_targets(dest_dir: &Path, targets: Vec<DownloadTarget>) -> Vec<DownloadTarget> {
    targets
        .into_iter()
        .filter(|target| !dest_dir.join(&target.file_name).exists())
        .collect()
}

/// Download `url` and write the body to `dest_dir/file_name`, overwriting
/// any existing file. Non-2xx statuses become errors.
pub async fn download_file(
    client: &Client,
    url: &str,
    file_name: &str,
    dest_dir: impl AsRef<Path>,
) -> Result<()> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?;
    let bytes = resp.bytes().await?;
    fs::write(dest_dir.as_ref().join(file_name), &bytes)
        .await
        .with_context(|| format!("writing {}", file_name))?;
    Ok(())
}

fn year_prefix(directory: &str) -> &str {
    directory.get(..4).unwrap_or(directory)
}
