//! `gavel fetch <url>` — fetch a listings page and print the catalogue.

use anyhow::Result;

use crate::actions::{fetch_action, FetchOutcome};
use crate::cli::output;
use crate::fetch::{PageClient, DEFAULT_TIMEOUT_MS};
use crate::selectors::SelectorProfile;
use crate::session::Catalogue;

/// Run the fetch command.
pub async fn run(url: &str, profile: &SelectorProfile) -> Result<()> {
    let client = PageClient::new(DEFAULT_TIMEOUT_MS);
    let mut state = Catalogue::new();

    match fetch_action(&mut state, &client, url, profile).await? {
        FetchOutcome::NoItems => {
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "url": url,
                    "count": 0,
                    "listings": [],
                }));
            } else {
                output::warn("No art items found. Check the URL or the page structure.");
            }
        }
        FetchOutcome::Loaded(count) => {
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "url": url,
                    "count": count,
                    "listings": state.listings(),
                }));
            } else {
                output::print_table(state.listings());
                output::success(&format!("{count} listings extracted"));
            }
        }
    }

    Ok(())
}
