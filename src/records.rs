// src/records.rs
//
// Row shapes shared by the harvester (writes) and the viewer (reads).
// Field order here is the CSV column order.

use serde::{Deserialize, Deserializer, Serialize};

/// One accepted listing. `category` is never empty: rows without a
/// category are dropped before a record exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingRecord {
    #[serde(deserialize_with = "missing_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub url: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub application_url: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub date_posted: String,
    #[serde(deserialize_with = "missing_as_empty")]
    pub source: String,
}

/// Four-column projection written next to the full file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub internship: String,
    pub company: String,
    pub location: String,
    pub category: String,
}

impl From<&ListingRecord> for SummaryRecord {
    fn from(r: &ListingRecord) -> Self {
        Self {
            internship: r.title.clone(),
            company: r.company.clone(),
            location: r.location.clone(),
            category: r.category.clone(),
        }
    }
}

/// Loaded full-record file, rows in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingTable {
    pub rows: Vec<ListingRecord>,
}

impl ListingTable {
    pub fn new(rows: Vec<ListingRecord>) -> Self { Self { rows } }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Placeholders other tools write for missing cells.
const MISSING: &[&str] = &["nan", "NaN", "None", "null"];

fn missing_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(de)?;
    Ok(match v {
        Some(s) if !MISSING.contains(&s.as_str()) => s,
        _ => s!(),
    })
}
