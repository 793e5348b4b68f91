//! Case conversions used to derive file and identifier names.
//!
//! All conversions use Unicode simple case mapping only, so the same input
//! always produces the same output regardless of locale.

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Split a name into word segments.
///
/// Segments break on whitespace, hyphens and underscores, and between a
/// lowercase letter and a following uppercase letter.
fn segments(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (i, c) in s.char_indices() {
        if is_separator(c) {
            if let Some(begin) = start.take() {
                parts.push(&s[begin..i]);
            }
        } else {
            if let (Some(begin), Some(p)) = (start, prev) {
                if p.is_lowercase() && c.is_uppercase() {
                    parts.push(&s[begin..i]);
                    start = Some(i);
                }
            }
            if start.is_none() {
                start = Some(i);
            }
        }
        prev = Some(c);
    }

    if let Some(begin) = start {
        parts.push(&s[begin..]);
    }
    parts
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn decapitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "user profile" -> "UserProfile")
pub fn to_pascal_case(s: &str) -> String {
    segments(s).into_iter().map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "user profile" -> "userProfile")
pub fn to_camel_case(s: &str) -> String {
    segments(s)
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                decapitalize(part)
            } else {
                capitalize(part)
            }
        })
        .collect()
}

/// Convert a string to kebab-case (e.g., "UserProfile" -> "user-profile")
///
/// Hyphens already present in the input are kept as they are; each run of
/// whitespace or underscores collapses into a single hyphen.
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_gap = false;

    for c in s.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_gap {
                result.push('-');
                in_gap = true;
            }
            prev = Some(c);
            continue;
        }

        in_gap = false;
        if prev.is_some_and(|p| p.is_lowercase()) && c.is_uppercase() {
            result.push('-');
        }
        result.extend(c.to_lowercase());
        prev = Some(c);
    }

    result
}
