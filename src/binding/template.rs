//! `{name}` placeholder scanning shared by URL and body templates.
//!
//! A placeholder is `{` + one or more `[A-Za-z0-9_]` + `}`. Any other brace,
//! such as the literal braces of a JSON body, is copied through untouched.

use crate::errors::SpotifyError;

/// Byte range (including braces) and name of each placeholder, in order.
fn placeholders(template: &str) -> Vec<(usize, usize, &str)> {
    let bytes = template.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{' {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            if end > start && end < bytes.len() && bytes[end] == b'}' {
                found.push((i, end + 1, &template[start..end]));
                i = end + 1;
                continue;
            }
        }
        i += 1;
    }
    found
}

pub(crate) fn placeholder_names(template: &str) -> Vec<&str> {
    placeholders(template)
        .into_iter()
        .map(|(_, _, name)| name)
        .collect()
}

/// Replaces every placeholder with `resolve(name)`, textually.
pub(crate) fn render<F>(template: &str, mut resolve: F) -> Result<String, SpotifyError>
where
    F: FnMut(&str) -> Result<String, SpotifyError>,
{
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    for (start, end, name) in placeholders(template) {
        out.push_str(&template[cursor..start]);
        out.push_str(&resolve(name)?);
        cursor = end;
    }
    out.push_str(&template[cursor..]);
    Ok(out)
}
