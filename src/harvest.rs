// src/harvest.rs
use chrono::NaiveDate;

use crate::{
    classify::classify,
    config::{consts::DATE_FORMAT, options::Source, rules::Rules},
    core::Fetch,
    normalize::{clean_company_url, extract_company_name},
    progress::Progress,
    records::{ListingRecord, SummaryRecord},
    specs::listings::{extract_rows, CandidateRow},
};

/// Both accumulators of one harvest run, index-aligned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Harvest {
    pub full: Vec<ListingRecord>,
    pub summary: Vec<SummaryRecord>,
}

impl Harvest {
    pub fn len(&self) -> usize { self.full.len() }
    pub fn is_empty(&self) -> bool { self.full.is_empty() }

    fn push(&mut self, record: ListingRecord) {
        self.summary.push(SummaryRecord::from(&record));
        self.full.push(record);
    }
}

/// Fetch every source in order and collect the classified rows.
///
/// A failed fetch skips that source only; the run carries on with the rest.
pub fn harvest(
    sources: &[Source],
    fetcher: &dyn Fetch,
    rules: &Rules,
    today: NaiveDate,
    mut progress: Option<&mut dyn Progress>,
) -> Harvest {
    let date_posted = today.format(DATE_FORMAT).to_string();
    let mut out = Harvest::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    for source in sources {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {} ({})", source.name, source.url));
        }

        let doc = match fetcher.fetch(&source.url) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("Source {}: {}", source.name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&source.name, &e);
                }
                continue;
            }
        };
        logf!("Source {}: content retrieved ({} bytes), processing jobs", source.name, doc.len());

        let before = out.len();
        for row in extract_rows(&doc, rules) {
            if let Some(record) = build_record(&row, rules, &source.name, &date_posted) {
                logf!("Found job: {} at {}", record.title, record.company);
                out.push(record);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&source.name, out.len() - before);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

/// Classify and normalise one candidate row. `None` when no keyword matches.
pub fn build_record(
    row: &CandidateRow,
    rules: &Rules,
    source: &str,
    date_posted: &str,
) -> Option<ListingRecord> {
    let category = classify(&row.raw_role, &rules.keywords)?;
    let url = clean_company_url(&row.raw_link);

    Some(ListingRecord {
        title: row.raw_role.clone(),
        company: extract_company_name(&row.raw_company),
        location: row.raw_location.clone(),
        application_url: url.clone(),
        url,
        category: s!(category),
        date_posted: s!(date_posted),
        source: s!(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::RoleKeywordTable;

    #[test]
    fn unclassified_row_is_dropped() {
        let rules = Rules::default();
        let row = CandidateRow {
            raw_company: s!("Acme"),
            raw_role: s!("Marketing Intern"),
            raw_location: s!("Remote"),
            raw_link: s!(),
        };
        assert_eq!(build_record(&row, &rules, "test", "2025-01-31"), None);
    }

    #[test]
    fn record_fields() {
        let rules = Rules {
            keywords: RoleKeywordTable::from_pairs([("strategy", "Strategy")]),
            ..Rules::default()
        };
        let row = CandidateRow {
            raw_company: s!("**[Acme Corp](https://acme.example)**"),
            raw_role: s!("Business Strategy Intern 2025"),
            raw_location: s!("New York, NY"),
            raw_link: s!("https://acme.example/apply?utm_source=Simplify"),
        };
        let r = build_record(&row, &rules, "SimplifyJobs", "2025-01-31").unwrap();
        assert_eq!(r.title, "Business Strategy Intern 2025");
        assert_eq!(r.company, "Acme Corp");
        assert_eq!(r.url, "https://acme.example/apply");
        assert_eq!(r.application_url, r.url);
        assert_eq!(r.category, "Strategy");
        assert_eq!(r.date_posted, "2025-01-31");
        assert_eq!(r.source, "SimplifyJobs");
    }
}
