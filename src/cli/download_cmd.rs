//! `gavel download <url>` — fetch a listings page and download every image.

use std::path::Path;

use anyhow::Result;

use crate::actions::{download_action, fetch_action, FetchOutcome};
use crate::cli::output;
use crate::fetch::{PageClient, DEFAULT_TIMEOUT_MS};
use crate::selectors::SelectorProfile;
use crate::session::Catalogue;

/// Run the download command.
pub async fn run(url: &str, profile: &SelectorProfile, out_dir: &Path) -> Result<()> {
    let client = PageClient::new(DEFAULT_TIMEOUT_MS);
    let mut state = Catalogue::new();

    match fetch_action(&mut state, &client, url, profile).await? {
        FetchOutcome::NoItems => {
            output::warn("No art items found — nothing to download.");
            return Ok(());
        }
        FetchOutcome::Loaded(count) => {
            output::status(&format!(
                "Downloading images for {count} listings into {}",
                out_dir.display()
            ));
        }
    }

    let show_progress = !output::is_quiet() && !output::is_json();
    let summary = download_action(&state, &client, out_dir, show_progress).await?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "url": url,
            "out_dir": out_dir.display().to_string(),
            "summary": summary,
        }));
    } else {
        output::success(&format!(
            "{} images saved, {} skipped, {} failed",
            summary.written, summary.skipped, summary.failed
        ));
    }

    Ok(())
}
