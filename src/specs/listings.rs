// src/specs/listings.rs
//! Scraping *spec* for markdown internship tables.
//!
//! Purpose:
//! - Walk a raw README-style document line by line.
//! - Keep lines that look like listing rows (`|` present, an intern/year marker,
//!   no excluded term) and split them into `CandidateRow`s.
//!
//! Row shape (after splitting on `|`; field 0 is the text before the first pipe):
//! ```text
//! | Company | Role | Location | Application | ...
//!     1        2        3
//! ```
//!
//! Non-Responsibilities:
//! - No networking, classification or normalisation; callers decide what a
//!   candidate row becomes.

use crate::config::consts::{CONTINUATION_MARK, FIELD_SEP, INTERN_MARKER, MIN_FIELDS};
use crate::config::rules::Rules;
use crate::core::{markdown, sanitize};

/// Raw cells of one kept table row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateRow {
    pub raw_company: String,
    pub raw_role: String,
    pub raw_location: String,
    /// First `[label](http…)` target on the line, or empty.
    pub raw_link: String,
}

/// Lazy iterator over the candidate rows of `doc`.
/// Calling it again on the same text starts over; nothing leaks between documents.
pub fn extract_rows<'a>(doc: &'a str, rules: &'a Rules) -> Rows<'a> {
    Rows { lines: doc.lines(), rules, last_company: None }
}

pub struct Rows<'a> {
    lines: std::str::Lines<'a>,
    rules: &'a Rules,
    // Company cell of the most recent table row, for `↳` continuation rows
    last_company: Option<&'a str>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = CandidateRow;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if !line.contains(FIELD_SEP) { continue; }

            let company_cell = line.split(FIELD_SEP).nth(1).map(str::trim);
            if company_cell.is_some_and(is_divider) {
                // New table: the header cell above is not a company
                self.last_company = None;
                continue;
            }
            let continued = company_cell.is_some_and(is_continuation);
            let inherited = self.last_company;
            if let Some(cell) = company_cell {
                if !continued { self.last_company = Some(cell); }
            }

            if !passes_prefilter(line, self.rules) { continue; }

            let Some(mut row) = split_row(line) else {
                logd!("Rows: too few fields, skipping '{}'", line.trim());
                continue;
            };
            if continued {
                if let Some(company) = inherited {
                    row.raw_company = s!(company);
                }
            }
            return Some(row);
        }
        None
    }
}

/// Separator present, intern/year marker present, no excluded term.
pub fn passes_prefilter(line: &str, rules: &Rules) -> bool {
    if !line.contains(FIELD_SEP) { return false; }
    let lower = line.to_lowercase();
    let marked = lower.contains(INTERN_MARKER)
        || rules.target_years.iter().any(|y| line.contains(y.as_str()));
    marked && !rules.exclusions.matches(&lower)
}

/// Split one table line into cells. `None` when it has fewer than four fields.
pub fn split_row(line: &str) -> Option<CandidateRow> {
    let fields: Vec<&str> = line.split(FIELD_SEP).collect();
    if fields.len() < MIN_FIELDS { return None; }

    Some(CandidateRow {
        raw_company: s!(fields[1].trim()),
        raw_role: s!(fields[2].trim()),
        raw_location: s!(fields[3].trim()),
        raw_link: markdown::first_link_target(line).map(String::from).unwrap_or_default(),
    })
}

/// `---`, `:---:` and the like.
fn is_divider(cell: &str) -> bool {
    !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':')
}

fn is_continuation(cell: &str) -> bool {
    sanitize::strip_emphasis(cell) == CONTINUATION_MARK
}
