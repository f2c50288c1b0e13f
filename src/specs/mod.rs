//! # Scraping "specs" module
//!
//! Format-specific readers for the listing documents the harvester fetches.
//! A spec knows *where the ground truth lives in the text* and how to pull
//! it out tolerantly; it never fetches, classifies or persists.
//!
//! ## Typical call chain
//! ```text
//! runner → harvest::harvest → Fetch::fetch(source.url)
//!                           ↘ specs::listings::extract_rows(doc)
//!                             → classify / normalize → records
//! ```
//!
//! ## Conventions
//! - Case-insensitive marker checks; no whole-document regexes.
//! - Malformed rows are skipped, not reported as errors.
//! - Specs are testable offline against literal snippets.
pub mod listings;
