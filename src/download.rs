//! Sequential image downloader.
//!
//! Walks the catalogue in order and fetches each non-empty image URL to
//! `<out_dir>/<artist>_<title>.jpg`. A failed image logs a warning and
//! the batch moves on; listings without an image URL are skipped
//! silently. No concurrency — one request at a time.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use crate::extract::Listing;
use crate::fetch::PageClient;

/// Default directory for downloaded images.
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Outcome of one download batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadSummary {
    /// Images written to disk.
    pub written: usize,
    /// Listings skipped because they carry no image URL.
    pub skipped: usize,
    /// Images that failed with a bad status or a transport error.
    pub failed: usize,
}

/// Download every image in `listings` into `out_dir`, strictly in order.
///
/// Creates `out_dir` if absent. Existing files are overwritten.
pub async fn download_images(
    client: &PageClient,
    listings: &[Listing],
    out_dir: &Path,
    show_progress: bool,
) -> Result<DownloadSummary> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let bar = if show_progress {
        let bar = ProgressBar::new(listings.len() as u64);
        bar.set_style(ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}").unwrap());
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut summary = DownloadSummary::default();

    for listing in listings {
        if listing.image_url.is_empty() {
            summary.skipped += 1;
            bar.inc(1);
            continue;
        }

        let name = image_filename(listing);
        bar.set_message(name.clone());
        let dest = out_dir.join(&name);

        match client.download_to(&listing.image_url, &dest).await {
            Ok(bytes) => {
                debug!(url = %listing.image_url, path = %dest.display(), bytes, "image saved");
                summary.written += 1;
            }
            Err(e) => {
                warn!(url = %listing.image_url, error = %e, "failed to download image");
                summary.failed += 1;
            }
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(summary)
}

/// Filename for a listing's image: `{artist}_{title}.jpg`.
///
/// Characters illegal in common filesystems are replaced by `_` in both
/// components. The extension is always `.jpg` — the bytes are whatever
/// the source served.
pub fn image_filename(listing: &Listing) -> String {
    format!(
        "{}_{}.jpg",
        sanitize_component(&listing.artist),
        sanitize_component(&listing.title)
    )
}

fn sanitize_component(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
