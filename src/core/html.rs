// src/core/html.rs
// Listing tables mix markdown with inline HTML (<a>, <img>, <br>, <details>).

/// Drop `<tag …>` spans, then collapse whitespace.
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`; a tag that
/// never closes is kept as text (`"A<B Capital"` survives intact).
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut pending = String::new();
    let mut in_tag = false;

    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_tag {
            pending.push(ch);
            if ch == '>' {
                in_tag = false;
                pending.clear();
                out.push(' ');
            }
            continue;
        }
        let opens = ch == '<'
            && chars.peek().is_some_and(|c| c.is_ascii_alphabetic() || *c == '/' || *c == '!');
        if opens {
            in_tag = true;
            pending.push(ch);
        } else {
            out.push(ch);
        }
    }
    // unclosed tag: give the text back
    out.push_str(&pending);

    super::sanitize::normalize_ws(&out)
}

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
}
