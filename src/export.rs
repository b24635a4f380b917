//! CSV export of the catalogue.
//!
//! Fixed column order `Artist,Title,Image URL`, RFC-4180-style quoting
//! for embedded delimiters, quotes, and newlines. Overwrites the target
//! file and returns the written bytes so the caller can pass them on.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::extract::Listing;

/// Default export filename in the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "art_auction_data.csv";

/// Header row, matching the listing field names in order.
pub const CSV_HEADER: &str = "Artist,Title,Image URL";

/// Serialize `listings` as CSV, write the file, and return the bytes.
pub fn export_csv(listings: &[Listing], path: &Path) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    writeln!(buf, "{CSV_HEADER}")?;
    for listing in listings {
        writeln!(
            buf,
            "{},{},{}",
            csv_escape(&listing.artist),
            csv_escape(&listing.title),
            csv_escape(&listing.image_url),
        )?;
    }

    std::fs::write(path, &buf)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(buf)
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
