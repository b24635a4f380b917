//! Injectable CSS selector profile for the extractor.
//!
//! Fixed tag+class selectors are a brittle coupling to one page structure,
//! so they live in a small mapping table instead of the extraction code.
//! The defaults target the stock auction-site markup; every selector can
//! be overridden from the command line.

use anyhow::{bail, Result};
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// CSS selectors identifying one listing and its sub-fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorProfile {
    /// Container element marking one listing.
    pub item: String,
    /// Artist-name element inside a container.
    pub artist: String,
    /// Title element inside a container.
    pub title: String,
    /// Image element inside a container (first match wins).
    pub image: String,
}

impl Default for SelectorProfile {
    fn default() -> Self {
        Self {
            item: "div.art-item".to_string(),
            artist: "span.artist-name".to_string(),
            title: "span.art-title".to_string(),
            image: "img".to_string(),
        }
    }
}

/// A [`SelectorProfile`] compiled into `scraper` selectors.
#[derive(Debug)]
pub struct CompiledSelectors {
    pub item: Selector,
    pub artist: Selector,
    pub title: Selector,
    pub image: Selector,
}

impl SelectorProfile {
    /// Compile all four selectors, failing on the first invalid one.
    ///
    /// Invalid selector text is a configuration error and is surfaced
    /// before any markup is parsed.
    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            item: parse_selector(&self.item, "item")?,
            artist: parse_selector(&self.artist, "artist")?,
            title: parse_selector(&self.title, "title")?,
            image: parse_selector(&self.image, "image")?,
        })
    }
}

fn parse_selector(css: &str, which: &str) -> Result<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Ok(sel),
        Err(e) => bail!("invalid {which} selector {css:?}: {e}"),
    }
}
