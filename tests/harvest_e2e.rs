// tests/harvest_e2e.rs
use std::cell::RefCell;
use std::fs;

use chrono::NaiveDate;

use intern_scrape::config::options::{HarvestOptions, Source};
use intern_scrape::config::rules::{RoleKeywordTable, Rules};
use intern_scrape::errors::{Error, Result};
use intern_scrape::harvest::harvest;
use intern_scrape::progress::{NullProgress, Progress};
use intern_scrape::runner::{self, HarvestOutcome};
use intern_scrape::store;

const ACME: &str = "| Acme Corp | Business Strategy Intern 2025 | New York, NY | [Apply](https://acme.example/apply) |";
const ACME_SWE: &str = "| Acme Corp | Software Engineering Intern 2025 | New York, NY | [Apply](https://acme.example/apply) |";

fn strategy_rules() -> Rules {
    Rules {
        keywords: RoleKeywordTable::from_pairs([("strategy", "Strategy")]),
        ..Rules::default()
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

#[test]
fn acme_strategy_row_becomes_one_record() {
    let sources = [Source::new("SimplifyJobs", "mem://one")];
    let fetch = |_: &str| -> Result<String> { Ok(format!("# Listings\n{ACME}\n")) };

    let out = harvest(&sources, &fetch, &strategy_rules(), day(), None);
    assert_eq!(out.len(), 1);

    let r = &out.full[0];
    assert_eq!(r.title, "Business Strategy Intern 2025");
    assert_eq!(r.company, "Acme Corp");
    assert_eq!(r.location, "New York, NY");
    assert_eq!(r.url, "https://acme.example/apply");
    assert_eq!(r.application_url, "https://acme.example/apply");
    assert_eq!(r.category, "Strategy");
    assert_eq!(r.date_posted, "2025-01-31");
    assert_eq!(r.source, "SimplifyJobs");

    let s = &out.summary[0];
    assert_eq!(s.internship, r.title);
    assert_eq!(s.category, "Strategy");
}

#[test]
fn software_row_is_dropped() {
    let sources = [Source::new("SimplifyJobs", "mem://one")];
    let fetch = |_: &str| -> Result<String> { Ok(s_doc(&[ACME_SWE])) };

    let out = harvest(&sources, &fetch, &strategy_rules(), day(), Some(&mut NullProgress));
    assert!(out.is_empty());
}

fn s_doc(lines: &[&str]) -> String {
    lines.join("\n")
}

#[derive(Default)]
struct Recorder {
    began: usize,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.began = total; }
    fn item_done(&mut self, source: &str, kept: usize) { self.done.push((source.to_string(), kept)); }
    fn item_failed(&mut self, source: &str, err: &Error) {
        assert!(err.is_fetch_failure());
        self.failed.push(source.to_string());
    }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn failed_source_is_skipped_and_order_kept() {
    let sources = [
        Source::new("first", "mem://first"),
        Source::new("down", "mem://down"),
        Source::new("last", "mem://last"),
    ];
    let calls = RefCell::new(Vec::new());
    let fetch = |url: &str| -> Result<String> {
        calls.borrow_mut().push(url.to_string());
        match url {
            "mem://first" => Ok(s_doc(&[ACME])),
            "mem://last" => Ok(s_doc(&[
                "| Initech | Corporate Strategy Intern | Austin, TX | x |",
                "| ↳ | Strategy Operations Intern | Remote | x |",
            ])),
            _ => Err(Error::Fetch { url: url.to_string(), status: 503 }),
        }
    };

    let mut rec = Recorder::default();
    let out = harvest(&sources, &fetch, &strategy_rules(), day(), Some(&mut rec));

    assert_eq!(*calls.borrow(), ["mem://first", "mem://down", "mem://last"]);
    let companies: Vec<_> = out.full.iter().map(|r| r.company.as_str()).collect();
    assert_eq!(companies, ["Acme Corp", "Initech", "Initech"]);
    let sources_seen: Vec<_> = out.full.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources_seen, ["first", "last", "last"]);

    assert_eq!(rec.began, 3);
    assert_eq!(rec.done, [("first".to_string(), 1), ("last".to_string(), 2)]);
    assert_eq!(rec.failed, ["down"]);
    assert!(rec.finished);
}

#[test]
fn run_writes_both_files_with_one_stamp() {
    let dir = tempfile::tempdir().unwrap();
    let opts = HarvestOptions {
        sources: vec![Source::new("SimplifyJobs", "mem://one")],
        rules: strategy_rules(),
        out_dir: dir.path().to_path_buf(),
    };
    let fetch = |_: &str| -> Result<String> { Ok(s_doc(&[ACME, ACME_SWE])) };

    let HarvestOutcome::Saved(summary) = runner::run(&opts, &fetch, None).unwrap() else {
        panic!("expected files to be written");
    };
    assert_eq!(summary.jobs, 1);

    let full = summary.full_path.file_name().unwrap().to_string_lossy().into_owned();
    let short = summary.summary_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(full.starts_with("business_internships_full_"));
    assert!(short.starts_with("business_internships_summary_"));
    assert_eq!(
        full.trim_start_matches("business_internships_full_"),
        short.trim_start_matches("business_internships_summary_"),
    );

    let header = fs::read_to_string(&summary.summary_path).unwrap();
    assert!(header.starts_with("internship,company,location,category"));

    let (path, table) = store::load_latest(dir.path()).unwrap();
    assert_eq!(path, summary.full_path);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].category, "Strategy");
}

#[test]
fn nothing_found_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = HarvestOptions {
        sources: vec![Source::new("down", "mem://down")],
        rules: strategy_rules(),
        out_dir: dir.path().to_path_buf(),
    };
    let fetch = |url: &str| -> Result<String> { Err(Error::Fetch { url: url.to_string(), status: 404 }) };

    assert_eq!(runner::run(&opts, &fetch, None).unwrap(), HarvestOutcome::NoJobsFound);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
