// src/runner.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{
    config::{
        consts::{FULL_PREFIX, SUMMARY_PREFIX},
        options::HarvestOptions,
    },
    core::Fetch,
    errors::Result,
    harvest::harvest,
    progress::Progress,
    store,
};

/// What a run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarvestOutcome {
    Saved(RunSummary),
    /// Zero records across all sources; nothing was written.
    NoJobsFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub jobs: usize,
    pub full_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Harvest every configured source, then persist both files under one timestamp.
pub fn run(
    opts: &HarvestOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<HarvestOutcome> {
    let today = Local::now().date_naive();
    let result = harvest(&opts.sources, fetcher, &opts.rules, today, progress);

    if result.is_empty() {
        logf!("Run: no jobs found across {} source(s)", opts.sources.len());
        return Ok(HarvestOutcome::NoJobsFound);
    }

    let stamp = Local::now().naive_local();
    let full_path = store::persist(&opts.out_dir, FULL_PREFIX, stamp, &result.full)?;
    let summary_path = store::persist(&opts.out_dir, SUMMARY_PREFIX, stamp, &result.summary)?;

    Ok(HarvestOutcome::Saved(RunSummary {
        jobs: result.len(),
        full_path,
        summary_path,
    }))
}
