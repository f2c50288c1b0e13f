// src/cli.rs
use std::env;

use crate::{
    config::options::HarvestOptions,
    core::HttpFetcher,
    errors::Error,
    progress::Progress,
    runner::{self, HarvestOutcome},
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const HELP: &str = "\
Usage: harvest

Fetches the configured internship listings, keeps business/finance/consulting
roles and writes two CSV files to the current directory:
  business_internships_full_<YYYYmmdd_HHMM>.csv
  business_internships_summary_<YYYYmmdd_HHMM>.csv

Options:
  -h, --help    Show this message";

/// Prints source-level progress to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, source: &str, kept: usize) {
        self.done += 1;
        println!("{source}: {kept} matching job(s) ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, source: &str, err: &Error) {
        self.done += 1;
        println!("{source}: skipped, {err} ({}/{})", self.done, self.total);
    }
}

pub fn run() -> Result<(), BoxError> {
    parse_cli()?;

    let opts = HarvestOptions::default();
    let fetcher = HttpFetcher::new()?;
    let mut progress = ConsoleProgress::default();

    match runner::run(&opts, &fetcher, Some(&mut progress))? {
        HarvestOutcome::Saved(summary) => {
            println!();
            println!("Saved {} jobs to {}", summary.jobs, summary.full_path.display());
            println!("Saved summary information to {}", summary.summary_path.display());
        }
        HarvestOutcome::NoJobsFound => {
            println!();
            println!("No jobs found");
        }
    }
    Ok(())
}

fn parse_cli() -> Result<(), BoxError> {
    let mut args = env::args().skip(1);
    if let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!("{HELP}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}
