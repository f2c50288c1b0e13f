// src/core/net.rs
// Blocking HTTPS GET for raw listing documents.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::errors::{Error, Result};

/// Anything that can turn a source URL into document text.
/// The harvester only sees this trait, so tests can hand it canned pages.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}

/// Closures work as fetchers too (handy for one-off sources and tests).
impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}
