// src/errors.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by fetch, persistence and viewer loading.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP {status} from {url}")]
    Fetch { url: String, status: u16 },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{} already exists; refusing to overwrite", path.display())]
    OutputExists { path: PathBuf },
    #[error("no listing file found in {}", dir.display())]
    NoListingFile { dir: PathBuf },
}

impl Error {
    /// True for the per-source failures the harvester skips over.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
