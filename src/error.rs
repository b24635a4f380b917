//! Error taxonomy for page fetches and image downloads.
//!
//! Fetch errors abort the action that triggered them; image errors are
//! per-listing and never abort the batch. An extraction that finds zero
//! listings is a soft condition, not an error value — callers get an empty
//! vector and decide how to surface it.

use thiserror::Error;

/// Errors from fetching the auction listings page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status other than 200.
    #[error("server answered with status {0}")]
    BadStatus(u16),

    /// DNS failure, refused connection, timeout, or any other
    /// network-level failure before a status code was available.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

/// Per-image download errors.
///
/// The downloader logs these as warnings and moves on to the next listing.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image server answered with a status other than 200.
    #[error("server answered with status {0}")]
    BadStatus(u16),

    /// Network-level failure while requesting or streaming the image.
    #[error("transport error: {0}")]
    Transport(String),

    /// Filesystem failure while writing the image to disk.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ImageError {
    fn from(e: reqwest::Error) -> Self {
        ImageError::Transport(e.to_string())
    }
}
