//! Session state — the catalogue currently held in memory.

use url::Url;

use crate::extract::Listing;

/// The listings from the most recent successful fetch, plus their source.
///
/// Starts empty (the idle state). A successful non-empty extraction
/// replaces the whole catalogue; download and export only read it. A
/// failed fetch or an empty extraction leaves the previous catalogue in
/// place.
#[derive(Debug, Default)]
pub struct Catalogue {
    listings: Vec<Listing>,
    source: Option<Url>,
}

impl Catalogue {
    /// Empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no catalogue has been loaded.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The page URL the current catalogue was extracted from.
    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    /// Replace the catalogue wholesale after a successful fetch.
    pub fn replace(&mut self, listings: Vec<Listing>, source: Option<Url>) {
        self.listings = listings;
        self.source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(artist: &str) -> Listing {
        Listing {
            artist: artist.to_string(),
            title: "Untitled".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = Catalogue::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert!(state.source().is_none());
    }

    #[test]
    fn test_replace_overwrites_wholesale() {
        let mut state = Catalogue::new();
        state.replace(vec![listing("A"), listing("B")], None);
        assert_eq!(state.len(), 2);

        let source = Url::parse("https://auctions.example/").unwrap();
        state.replace(vec![listing("C")], Some(source.clone()));
        assert_eq!(state.len(), 1);
        assert_eq!(state.listings()[0].artist, "C");
        assert_eq!(state.source(), Some(&source));
    }
}
