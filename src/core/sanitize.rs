// src/core/sanitize.rs

/// Collapse sequences of whitespace (NBSP included) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '\u{a0}' {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Join scraped text nodes into one normalized string.
pub fn join_text<'a, I: IntoIterator<Item = &'a str>>(parts: I) -> String {
    let mut buf = s!();
    for p in parts {
        buf.push_str(p);
    }
    normalize_ws(&buf)
}

/// Spreadsheet cells sometimes arrive as "nan"/"NaT" from upstream exports.
pub fn is_blank_cell(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.eq_ignore_ascii_case("nan") || t.eq_ignore_ascii_case("nat")
}
