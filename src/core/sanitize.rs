// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove markdown emphasis markers (`**`, `__`, `*`, `_` at the edges, `~~`).
pub fn strip_emphasis(s: &str) -> String {
    let s = s.replace("**", "").replace("~~", "").replace("__", "");
    s.trim().trim_matches(|c| c == '*' || c == '_').trim().to_string()
}

/// Keep only characters that are safe in a file name.
pub fn sanitize_file_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut last_us = false;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("listings") } else { out }
}
