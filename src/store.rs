// src/store.rs
//
// CSV persistence for harvest output and loading for the viewer.
// Every persist call creates a new file; an existing file is never touched.

use std::{
    fs::OpenOptions,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::consts::FULL_PREFIX;
use crate::errors::{Error, Result};
use crate::file::{ensure_directory, latest_stamped, stamped_filename};
use crate::records::{ListingRecord, ListingTable};

/// Write `records` (header row first) to `<dir>/<prefix>_<stamp>.csv`.
/// Callers pass the same `stamp` for the full and summary files of one run.
pub fn persist<T: Serialize>(
    dir: &Path,
    prefix: &str,
    stamp: NaiveDateTime,
    records: &[T],
) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(stamped_filename(prefix, stamp));

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => Error::OutputExists { path: path.clone() },
            _ => Error::Io(e),
        })?;
    let mut out = csv::Writer::from_writer(BufWriter::new(file));
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;

    logf!("Store: wrote {} rows to {}", records.len(), path.display());
    Ok(path)
}

/// Newest full-record file in `dir`, if any.
pub fn latest_full_file(dir: &Path) -> Option<PathBuf> {
    latest_stamped(dir, FULL_PREFIX)
}

/// Read a full-record file. Missing cells/columns load as "".
pub fn load(path: &Path) -> Result<ListingTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let rows = reader
        .deserialize::<ListingRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    logf!("Store: loaded {} rows from {}", rows.len(), path.display());
    Ok(ListingTable::new(rows))
}

/// `latest_full_file` + `load`; `NoListingFile` when there is nothing to load.
pub fn load_latest(dir: &Path) -> Result<(PathBuf, ListingTable)> {
    let path = latest_full_file(dir)
        .ok_or_else(|| Error::NoListingFile { dir: dir.to_path_buf() })?;
    let table = load(&path)?;
    Ok((path, table))
}

/// Raw CSV text for a set of records (clipboard copy in the viewer).
pub fn to_csv_string<T: Serialize>(records: &[T]) -> Result<String> {
    let mut out = csv::Writer::from_writer(Vec::new());
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    let buf = out.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
