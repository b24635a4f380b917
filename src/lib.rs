// Copyright 2026 Gavel Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gavel library — art-auction catalogue scraping.
//!
//! This library crate exposes the core modules for the `gavel` binary and
//! for integration testing: a one-shot page fetcher, a CSS-selector-based
//! listing extractor, a sequential image downloader, and a CSV exporter,
//! tied together by an explicit session catalogue.

pub mod actions;
pub mod cli;
pub mod download;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod selectors;
pub mod session;
