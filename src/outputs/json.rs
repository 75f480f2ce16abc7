//! JSON digest output.
//!
//! The digest is pretty-printed with two-space indentation and non-ASCII text
//! written as-is, so the Arabic headlines stay readable in the file. Each run
//! overwrites the previous file; concurrent runs are not coordinated.

use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::error::OutputError;
use crate::models::NewsBundle;
use crate::utils::ensure_parent_dir;

/// Write `bundle` to `path`, creating the parent directory if needed.
///
/// Any existing file is replaced.
///
/// # Arguments
///
/// * `bundle` - The digest to serialize
/// * `path` - Destination file, usually `data/daily_news.json`
///
/// # Returns
///
/// `Ok(())` on success, or an [`OutputError`] if directory creation or file
/// writing fails.
///
/// # Examples
///
/// ```ignore
/// let bundle = fetcher.fetch_health_news().await;
/// write_bundle(&bundle, Path::new("data/daily_news.json")).await?;
/// ```
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_bundle(bundle: &NewsBundle, path: &Path) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(bundle)?;

    ensure_parent_dir(path).await?;

    info!(articles = bundle.articles.len(), "Writing JSON");
    if let Err(source) = fs::write(path, json).await {
        error!(error = %source, "Failed to write JSON");
        return Err(OutputError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    info!("Wrote JSON digest");

    Ok(())
}

/// Read a digest previously written by [`write_bundle`].
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn read_bundle(path: &Path) -> Result<NewsBundle, OutputError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&raw)?)
}
