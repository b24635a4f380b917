//! Extract auction listings from raw HTML.
//!
//! CSS-selector parsing with the `scraper` crate — no JavaScript
//! execution, no browser. Missing sub-elements degrade to fallback
//! values; they never abort a listing.

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::selectors::CompiledSelectors;

/// Fallback artist when the artist element is missing.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Fallback title when the title element is missing.
pub const UNTITLED: &str = "Untitled";

/// One extracted art listing.
///
/// Immutable once extracted; identity is positional within the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub artist: String,
    pub title: String,
    /// May be empty, in which case download skips this listing.
    pub image_url: String,
}

/// Extract every listing from `html`, in document order.
///
/// Each container matched by the profile's item selector yields exactly
/// one listing: artist and title take the first matching sub-element's
/// trimmed text (or the fixed fallback when absent), the image URL takes
/// the first image element's `src` attribute (or the empty string).
///
/// Returns an empty vector when no container matches — the soft
/// "no items found" condition, distinct from a fetch failure.
pub fn extract_listings(
    html: &str,
    selectors: &CompiledSelectors,
    base: Option<&Url>,
) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for item in document.select(&selectors.item) {
        let artist = item
            .select(&selectors.artist)
            .next()
            .map(element_text)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        let title = item
            .select(&selectors.title)
            .next()
            .map(element_text)
            .unwrap_or_else(|| UNTITLED.to_string());

        let image_url = item
            .select(&selectors.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| resolve_src(src, base))
            .unwrap_or_default();

        listings.push(Listing {
            artist,
            title,
            image_url,
        });
    }

    listings
}

/// Join an element's text nodes and trim surrounding whitespace.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Resolve a possibly-relative image URL against the page it came from.
///
/// Absolute URLs pass through untouched. Values that cannot be resolved
/// are kept verbatim so the downloader can still report them.
fn resolve_src(src: &str, base: Option<&Url>) -> String {
    if src.is_empty() {
        return String::new();
    }
    match Url::parse(src) {
        Ok(_) => src.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(b) => b
                .join(src)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| src.to_string()),
            None => src.to_string(),
        },
        Err(_) => src.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::SelectorProfile;

    fn compiled() -> crate::selectors::CompiledSelectors {
        SelectorProfile::default().compile().unwrap()
    }

    fn item(artist: &str, title: &str, src: &str) -> String {
        format!(
            r#"<div class="art-item"><span class="artist-name">{artist}</span><span class="art-title">{title}</span><img src="{src}"></div>"#
        )
    }

    #[test]
    fn test_extracts_every_well_formed_container() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            item("Vermeer", "Girl with a Pearl Earring", "http://x/1.jpg"),
            item("Hokusai", "The Great Wave", "http://x/2.jpg"),
            item("Kahlo", "The Two Fridas", "http://x/3.jpg"),
        );
        let listings = extract_listings(&html, &compiled(), None);
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[1].artist, "Hokusai");
        assert_eq!(listings[1].title, "The Great Wave");
        assert_eq!(listings[1].image_url, "http://x/2.jpg");
    }

    #[test]
    fn test_minimal_document() {
        let html = r#"<div class="art-item"><span class="artist-name">A</span><span class="art-title">T</span><img src="http://x/i.jpg"></div>"#;
        let listings = extract_listings(html, &compiled(), None);
        assert_eq!(
            listings,
            vec![Listing {
                artist: "A".to_string(),
                title: "T".to_string(),
                image_url: "http://x/i.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_artist_falls_back() {
        let html = r#"<div class="art-item"><span class="art-title">T</span><img src="http://x/i.jpg"></div>"#;
        let listings = extract_listings(html, &compiled(), None);
        assert_eq!(listings[0].artist, UNKNOWN_ARTIST);
        assert_eq!(listings[0].title, "T");
    }

    #[test]
    fn test_missing_title_falls_back() {
        let html = r#"<div class="art-item"><span class="artist-name">A</span></div>"#;
        let listings = extract_listings(html, &compiled(), None);
        assert_eq!(listings[0].title, UNTITLED);
    }

    #[test]
    fn test_missing_image_yields_empty_url() {
        let html = r#"<div class="art-item"><span class="artist-name">A</span><span class="art-title">T</span></div>"#;
        let listings = extract_listings(html, &compiled(), None);
        assert_eq!(listings[0].image_url, "");
    }

    #[test]
    fn test_no_containers_yields_empty_result() {
        let html = "<html><body><p>Auction closed.</p></body></html>";
        let listings = extract_listings(html, &compiled(), None);
        assert!(listings.is_empty());
    }

    #[test]
    fn test_text_is_trimmed() {
        let html = r#"<div class="art-item"><span class="artist-name">  Monet
        </span><span class="art-title"> Water Lilies </span></div>"#;
        let listings = extract_listings(html, &compiled(), None);
        assert_eq!(listings[0].artist, "Monet");
        assert_eq!(listings[0].title, "Water Lilies");
    }

    #[test]
    fn test_first_image_wins() {
        let html = r#"<div class="art-item"><img src="http://x/a.jpg"><img src="http://x/b.jpg"></div>"#;
        let listings = extract_listings(html, &compiled(), None);
        assert_eq!(listings[0].image_url, "http://x/a.jpg");
    }

    #[test]
    fn test_relative_src_resolves_against_base() {
        let base = Url::parse("https://auctions.example/catalogue/page1").unwrap();
        let html = r#"<div class="art-item"><img src="/media/lot7.jpg"></div>"#;
        let listings = extract_listings(html, &compiled(), Some(&base));
        assert_eq!(listings[0].image_url, "https://auctions.example/media/lot7.jpg");
    }

    #[test]
    fn test_absolute_src_passes_through() {
        let base = Url::parse("https://auctions.example/").unwrap();
        let html = r#"<div class="art-item"><img src="http://cdn.example/lot.jpg"></div>"#;
        let listings = extract_listings(html, &compiled(), Some(&base));
        assert_eq!(listings[0].image_url, "http://cdn.example/lot.jpg");
    }

    #[test]
    fn test_document_order_preserved() {
        let html = format!(
            "{}{}",
            item("B", "second", "http://x/2.jpg"),
            item("A", "first", "http://x/1.jpg"),
        );
        let listings = extract_listings(&html, &compiled(), None);
        assert_eq!(listings[0].artist, "B");
        assert_eq!(listings[1].artist, "A");
    }

    #[test]
    fn test_custom_profile_retargets_extraction() {
        let profile = SelectorProfile {
            item: "li.lot".to_string(),
            artist: ".lot-artist".to_string(),
            title: ".lot-title".to_string(),
            image: "img".to_string(),
        };
        let html = r#"<ul><li class="lot"><p class="lot-artist">Turner</p><p class="lot-title">The Fighting Temeraire</p><img src="http://x/t.jpg"></li></ul>"#;
        let listings = extract_listings(html, &profile.compile().unwrap(), None);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].artist, "Turner");
    }
}
