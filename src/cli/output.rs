//! Output helpers shared by subcommands and the REPL.
//!
//! Global flags (`--json`, `--quiet`, `--verbose`, `--no-color`) are
//! exported as environment variables in `main` so every module can check
//! them without threading a config value through.

use crate::extract::Listing;

/// True when `--json` was passed.
pub fn is_json() -> bool {
    std::env::var("GAVEL_JSON").is_ok()
}

/// True when `--quiet` was passed.
pub fn is_quiet() -> bool {
    std::env::var("GAVEL_QUIET").is_ok()
}

/// True unless `--no-color` was passed or `NO_COLOR` is set.
pub fn use_color() -> bool {
    std::env::var("GAVEL_NO_COLOR").is_err() && std::env::var("NO_COLOR").is_err()
}

/// Print a JSON value to stdout (machine-readable mode).
pub fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Status message — suppressed in quiet mode.
pub fn status(msg: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("  {msg}");
}

/// Success message with a green marker.
pub fn success(msg: &str) {
    if is_quiet() {
        return;
    }
    if use_color() {
        eprintln!("  \x1b[32m\u{2713}\x1b[0m {msg}");
    } else {
        eprintln!("  {msg}");
    }
}

/// Warning message with a yellow marker. Not suppressed by quiet mode.
pub fn warn(msg: &str) {
    if use_color() {
        eprintln!("  \x1b[33m!\x1b[0m {msg}");
    } else {
        eprintln!("  ! {msg}");
    }
}

/// Error message with a red marker. Not suppressed by quiet mode.
pub fn error(msg: &str) {
    if use_color() {
        eprintln!("  \x1b[31m\u{2717}\x1b[0m {msg}");
    } else {
        eprintln!("  error: {msg}");
    }
}

/// Render the catalogue as an aligned three-column table.
///
/// Artist and title columns are width-capped; the image URL column is
/// printed last and unpadded so long URLs don't wreck the layout.
pub fn print_table(listings: &[Listing]) {
    const ARTIST_CAP: usize = 28;
    const TITLE_CAP: usize = 40;

    let artist_w = column_width(listings.iter().map(|l| l.artist.as_str()), "Artist", ARTIST_CAP);
    let title_w = column_width(listings.iter().map(|l| l.title.as_str()), "Title", TITLE_CAP);

    println!();
    println!("  {:<artist_w$}  {:<title_w$}  {}", "Artist", "Title", "Image URL");
    println!("  {:-<artist_w$}  {:-<title_w$}  {:-<9}", "", "", "");
    for listing in listings {
        println!(
            "  {:<artist_w$}  {:<title_w$}  {}",
            clip(&listing.artist, artist_w),
            clip(&listing.title, title_w),
            listing.image_url,
        );
    }
    println!();
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str, cap: usize) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
        .min(cap)
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('\u{2026}');
        out
    }
}
