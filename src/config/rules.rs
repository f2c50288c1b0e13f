// src/config/rules.rs
//! Keyword configuration for row filtering and role classification.
//!
//! `RoleKeywordTable` is an ordered list, not a map: classification walks it
//! front to back and the first key found in the role text wins. Inserting a
//! keyword before an overlapping one (e.g. `"strategy"` before
//! `"sales strategy"`) changes which category such roles receive.
//!
//! Both tables are built once and handed to the extractor/classifier by
//! reference; nothing here is global.

use crate::config::consts::TARGET_YEARS;

/// (substring, category) in declaration order.
const ROLE_KEYWORDS: &[(&str, &str)] = &[
    // Sales
    ("sales analytics", "Sales Analytics"),
    ("sales analyst", "Sales Analyst"),
    ("sales consulting", "Sales Consulting"),
    ("sales intelligence", "Sales Intelligence"),
    ("sales insights", "Sales Insights"),
    ("sales operations", "Sales Operations"),
    ("sales planning", "Sales Planning"),
    ("sales strategy", "Sales Strategy"),
    // Strategy
    ("strategy analytics", "Strategy Analytics"),
    ("strategy analyst", "Strategy Analyst"),
    ("strategy consulting", "Strategy Consulting"),
    ("strategy intelligence", "Strategy Intelligence"),
    ("strategy insights", "Strategy Insights"),
    ("strategy operations", "Strategy Operations"),
    ("strategy planning", "Strategy Planning"),
    // Investment
    ("investment analytics", "Investment Analytics"),
    ("investment analyst", "Investment Analyst"),
    ("investment banking", "Investment Banking"),
    ("investment consulting", "Investment Consulting"),
    ("investment intelligence", "Investment Intelligence"),
    ("investment insights", "Investment Insights"),
    ("investment operations", "Investment Operations"),
    ("investment planning", "Investment Planning"),
    ("investment strategy", "Investment Strategy"),
    // Business
    ("business analytics", "Business Analytics"),
    ("business analyst", "Business Analyst"),
    ("business consulting", "Business Consulting"),
    ("business development", "Business Development"),
    ("business intelligence", "Business Intelligence"),
    ("business operations", "Business Operations"),
    ("business planning", "Business Planning"),
    ("business strategy", "Business Strategy"),
    // Management
    ("management consultant", "Management Consultant"),
];

/// Technical roles; any row containing one of these is dropped.
const EXCLUDE_KEYWORDS: &[&str] = &[
    "data analyst",
    "data science",
    "software",
    "engineer",
    "developer",
    "technical",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleKeywordTable {
    entries: Vec<(String, String)>,
    shadowed: Vec<(String, String)>,
}

impl RoleKeywordTable {
    /// Build from ordered pairs. Keys are lowercased; a key declared again
    /// later is unreachable under first-match and is dropped with an error log.
    pub fn from_pairs<K, C>(pairs: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: AsRef<str>,
        C: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut shadowed = Vec::new();

        for (key, category) in pairs {
            let key = key.as_ref().trim().to_lowercase();
            let category = category.into();
            if key.is_empty() { continue; }

            if let Some((_, kept)) = entries.iter().find(|(k, _)| *k == key) {
                loge!("Keyword '{}' → '{}' shadowed by earlier '{}' → '{}'", key, category, key, kept);
                shadowed.push((key, category));
            } else {
                entries.push((key, category));
            }
        }

        Self { entries, shadowed }
    }

    pub fn entries(&self) -> &[(String, String)] { &self.entries }

    /// Duplicate declarations that were dropped, in the order they appeared.
    pub fn shadowed(&self) -> &[(String, String)] { &self.shadowed }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for RoleKeywordTable {
    fn default() -> Self { Self::from_pairs(ROLE_KEYWORDS.iter().copied()) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionList {
    terms: Vec<String>,
}

impl ExclusionList {
    pub fn new<S: AsRef<str>>(terms: impl IntoIterator<Item = S>) -> Self {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// `lower` must already be lowercased.
    pub fn matches(&self, lower: &str) -> bool {
        self.terms.iter().any(|t| lower.contains(t.as_str()))
    }

    pub fn terms(&self) -> &[String] { &self.terms }
}

impl Default for ExclusionList {
    fn default() -> Self { Self::new(EXCLUDE_KEYWORDS.iter()) }
}

/// Everything the extractor and classifier need for one harvest run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    pub keywords: RoleKeywordTable,
    pub exclusions: ExclusionList,
    pub target_years: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            keywords: RoleKeywordTable::default(),
            exclusions: ExclusionList::default(),
            target_years: TARGET_YEARS.iter().map(|y| s!(*y)).collect(),
        }
    }
}
