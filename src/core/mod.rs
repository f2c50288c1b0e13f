// src/core/mod.rs

pub mod html;
pub mod markdown;
pub mod net;
pub mod sanitize;

pub use net::{Fetch, HttpFetcher};
