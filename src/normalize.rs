// src/normalize.rs
//! Company/URL normalisation for listing cells.
//!
//! Both functions are total: odd input degrades to a trimmed original (names)
//! or an empty string (URLs), never an error.

use reqwest::Url;

use crate::core::{html, markdown, sanitize};

/// Query parameters that only identify the referrer/campaign.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content", "utm_id",
    "gclid", "gclsrc", "fbclid", "msclkid", "dclid",
    "mc_cid", "mc_eid",
    "ref", "referrer", "src",
    "_ga", "_gl",
];

/// Clean display name from a raw company cell.
///
/// `**[Acme Corp](https://acme.example)**` → `Acme Corp`.
/// Plain text comes back trimmed with HTML and emphasis removed.
pub fn extract_company_name(raw: &str) -> String {
    let trimmed = raw.trim();

    let inner = markdown::first_link_label(trimmed).unwrap_or(trimmed);
    let cleaned = html::strip_tags(html::normalize_entities(inner));
    let cleaned = sanitize::strip_emphasis(&cleaned);

    if cleaned.is_empty() { s!(trimmed) } else { cleaned }
}

/// Canonical absolute http(s) URL, or `""` when `raw_link` is empty or not one.
///
/// Drops tracking parameters and the fragment; the host is lowercased by the parser.
pub fn clean_company_url(raw_link: &str) -> String {
    let raw_link = raw_link.trim();
    if raw_link.is_empty() { return s!(); }

    let mut url = match Url::parse(raw_link) {
        Ok(u) => u,
        Err(e) => {
            logd!("URL: rejecting '{}' ({})", raw_link, e);
            return s!();
        }
    };

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return s!();
    }

    // Rebuild only when something was dropped; kept pairs stay byte-for-byte.
    if let Some(query) = url.query() {
        let total = query.split('&').count();
        let kept: Vec<&str> = query.split('&').filter(|seg| !is_tracking_segment(seg)).collect();
        if kept.len() != total {
            let rebuilt = kept.join("&");
            url.set_query(if rebuilt.is_empty() { None } else { Some(rebuilt.as_str()) });
        }
    }
    url.set_fragment(None);

    url.into()
}

/// `key=value` (or bare `key`) segment of a raw query string.
fn is_tracking_segment(seg: &str) -> bool {
    let key = seg.split('=').next().unwrap_or_default();
    !key.is_empty() && is_tracking_param(key)
}

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key.as_str())
}
