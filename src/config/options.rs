// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_SOURCES;
use super::rules::Rules;

/// One configured origin document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Harvested strictly in this order.
    pub sources: Vec<Source>,
    pub rules: Rules,
    /// Where both CSV files land.
    pub out_dir: PathBuf,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES
                .iter()
                .map(|(name, url)| Source::new(*name, *url))
                .collect(),
            rules: Rules::default(),
            out_dir: PathBuf::from("."),
        }
    }
}
