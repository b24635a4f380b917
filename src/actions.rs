//! Action handlers — one per user trigger.
//!
//! Each handler takes the session catalogue explicitly: fetch may replace
//! it, download and export only read it. Errors are returned to the
//! caller (REPL command or CLI subcommand), which surfaces them as a
//! user-visible message; nothing propagates past the action boundary.

use std::path::Path;

use anyhow::{bail, Result};
use url::Url;

use crate::download::{download_images, DownloadSummary};
use crate::export::export_csv;
use crate::extract::extract_listings;
use crate::fetch::PageClient;
use crate::selectors::SelectorProfile;
use crate::session::Catalogue;

/// Result of a fetch action that completed without a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The catalogue was replaced with this many listings.
    Loaded(usize),
    /// The page parsed but no container matched — the catalogue is
    /// left untouched.
    NoItems,
}

/// Fetch a listings page and extract it into the catalogue.
///
/// An empty URL is rejected before any network call. A fetch failure or
/// an empty extraction leaves the previous catalogue in place; only a
/// non-empty extraction replaces it.
pub async fn fetch_action(
    state: &mut Catalogue,
    client: &PageClient,
    url: &str,
    profile: &SelectorProfile,
) -> Result<FetchOutcome> {
    let url = url.trim();
    if url.is_empty() {
        bail!("no URL provided");
    }

    let selectors = profile.compile()?;
    let html = client.get_page(url).await?;

    let base = Url::parse(url).ok();
    let listings = extract_listings(&html, &selectors, base.as_ref());
    if listings.is_empty() {
        return Ok(FetchOutcome::NoItems);
    }

    let count = listings.len();
    state.replace(listings, base);
    Ok(FetchOutcome::Loaded(count))
}

/// Download every image in the catalogue into `out_dir`.
pub async fn download_action(
    state: &Catalogue,
    client: &PageClient,
    out_dir: &Path,
    show_progress: bool,
) -> Result<DownloadSummary> {
    download_images(client, state.listings(), out_dir, show_progress).await
}

/// Export the catalogue as CSV and return the written bytes.
pub fn export_action(state: &Catalogue, path: &Path) -> Result<Vec<u8>> {
    export_csv(state.listings(), path)
}
