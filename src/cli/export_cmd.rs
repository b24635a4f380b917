//! `gavel export <url>` — fetch a listings page and export it as CSV.

use std::path::Path;

use anyhow::Result;

use crate::actions::{export_action, fetch_action, FetchOutcome};
use crate::cli::output;
use crate::fetch::{PageClient, DEFAULT_TIMEOUT_MS};
use crate::selectors::SelectorProfile;
use crate::session::Catalogue;

/// Run the export command.
pub async fn run(url: &str, profile: &SelectorProfile, path: &Path) -> Result<()> {
    let client = PageClient::new(DEFAULT_TIMEOUT_MS);
    let mut state = Catalogue::new();

    match fetch_action(&mut state, &client, url, profile).await? {
        FetchOutcome::NoItems => {
            output::warn("No art items found — nothing to export.");
            return Ok(());
        }
        FetchOutcome::Loaded(_) => {}
    }

    let bytes = export_action(&state, path)?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "url": url,
            "path": path.display().to_string(),
            "rows": state.len(),
            "bytes": bytes.len(),
        }));
    } else {
        output::success(&format!(
            "{} rows exported to {} ({} bytes)",
            state.len(),
            path.display(),
            bytes.len()
        ));
    }

    Ok(())
}
