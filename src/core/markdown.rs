// src/core/markdown.rs
// Markdown link helpers for table cells and rows.

use std::sync::LazyLock;

use regex::Regex;

/// `[label](http(s)://target)`; the target stops at whitespace or `)`.
static LINK_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:[^\]]*)\]\((https?://[^\s\)]+)\)").expect("link target regex")
});

/// `[label](anything)`, label captured.
static LINK_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("link label regex")
});

/// First absolute link target anywhere in `text`.
pub fn first_link_target(text: &str) -> Option<&str> {
    LINK_TARGET
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Label of the first markdown link in `text`.
pub fn first_link_label(text: &str) -> Option<&str> {
    LINK_LABEL
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_target() {
        let row = "| [Acme](https://acme.example) | Intern | NYC | [Apply](https://acme.example/apply) |";
        assert_eq!(first_link_target(row), Some("https://acme.example"));
    }

    #[test]
    fn ignores_relative_targets() {
        assert_eq!(first_link_target("[x](/jobs/1) and [y](https://y.example/a)"), Some("https://y.example/a"));
        assert_eq!(first_link_target("no links here"), None);
    }

    #[test]
    fn target_stops_at_paren() {
        assert_eq!(first_link_target("[a](https://a.example/p)trailing)"), Some("https://a.example/p"));
    }

    #[test]
    fn labels() {
        assert_eq!(first_link_label("**[Acme Corp](https://acme.example)**"), Some("Acme Corp"));
        assert_eq!(first_link_label("Acme"), None);
    }
}
