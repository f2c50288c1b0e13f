// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::config::consts::{FILE_EXT, STAMP_FORMAT};
use crate::core::sanitize::sanitize_file_stem;
use crate::errors::Result;

/// `<prefix>_<YYYYmmdd_HHMM>.csv`
pub fn stamped_filename(prefix: &str, stamp: NaiveDateTime) -> String {
    format!("{}_{}.{}", sanitize_file_stem(prefix), stamp.format(STAMP_FORMAT), FILE_EXT)
}

/// Inverse of `stamped_filename`: the embedded timestamp if `file_name`
/// follows the naming scheme for `prefix`.
pub fn parse_stamp(file_name: &str, prefix: &str) -> Option<NaiveDateTime> {
    let rest = file_name.strip_prefix(prefix)?.strip_prefix('_')?;
    let stamp = rest.strip_suffix(FILE_EXT)?.strip_suffix('.')?;
    NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()
}

/// Newest `<prefix>_<stamp>.csv` in `dir` by embedded timestamp
/// (ties broken by file name). Unreadable dirs count as empty.
pub fn latest_stamped(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            logd!("Scan: cannot read {} ({})", dir.display(), e);
            return None;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_owned();
            let stamp = parse_stamp(&name, prefix)?;
            Some((stamp, name, path))
        })
        .max_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)))
        .map(|(_, _, path)| path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn filename_format() {
        assert_eq!(
            stamped_filename("business_internships_full", stamp(9, 5)),
            "business_internships_full_20250131_0905.csv"
        );
    }

    #[test]
    fn stamp_parses_back() {
        let name = stamped_filename("business_internships_full", stamp(23, 59));
        assert_eq!(parse_stamp(&name, "business_internships_full"), Some(stamp(23, 59)));
    }

    #[test]
    fn stamp_rejects_other_names() {
        let p = "business_internships_full";
        assert_eq!(parse_stamp("business_internships_summary_20250131_0905.csv", p), None);
        assert_eq!(parse_stamp("business_internships_full_20250131.csv", p), None);
        assert_eq!(parse_stamp("business_internships_full_20250131_0905.tsv", p), None);
        assert_eq!(parse_stamp("business_internships_full_latest.csv", p), None);
    }
}
