//! Text normalization utilities shared by the scorers and guidance generators.
//!
//! Normalized tokens are always trimmed and lower-cased, and empty pieces are
//! dropped. Project names are the one exception: they keep their original
//! casing because they are rendered verbatim in resume bullets.

/// Splits a comma-delimited free-text field into normalized tokens.
///
/// Empty input yields an empty vec. Each piece is trimmed and lower-cased;
/// pieces that are empty after trimming are dropped.
pub fn split_delimited(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Splits free-form project text into project names.
///
/// Newlines are treated as semicolons, then the text is split on semicolons.
/// If that yields nothing, falls back to splitting on commas — profiles in the
/// wild use either separator style. Names keep their original casing.
pub fn split_projects(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let raw = text.replace('\n', ";");
    let parts: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    if !parts.is_empty() {
        return parts;
    }
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Title-cases a string: a letter is upper-cased when the preceding character
/// is non-alphabetic and lower-cased otherwise.
///
/// "problem solving" → "Problem Solving", "sql" → "Sql", "node.js" → "Node.Js".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
