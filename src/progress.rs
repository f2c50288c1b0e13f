// src/progress.rs
use crate::errors::Error;

/// Lightweight progress reporting for a harvest run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source fetched and processed; `kept` records came out of it.
    fn item_done(&mut self, _source: &str, _kept: usize) {}

    /// One source skipped because its fetch failed.
    fn item_failed(&mut self, _source: &str, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
