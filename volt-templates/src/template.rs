//! Placeholder substitution for module-scoped templates.
//!
//! Templates mark name insertion points with `{{Pascal}}`, `{{camel}}` and
//! `{{kebab}}`. Substitution is a single left-to-right pass, so text coming
//! from a name is never re-scanned for placeholders.

use volt_core::CanonicalForms;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

fn lookup<'a>(key: &str, forms: &'a CanonicalForms) -> Option<&'a str> {
    match key {
        "Pascal" => Some(forms.pascal()),
        "camel" => Some(forms.camel()),
        "kebab" => Some(forms.kebab()),
        _ => None,
    }
}

/// Fill a template with the canonical forms of a module name.
///
/// Brace runs that are not a known placeholder (JSX expressions, object
/// literals) are copied through unchanged.
pub(crate) fn render(template: &str, forms: &CanonicalForms) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let substituted = after_open.find(CLOSE).and_then(|end| {
            lookup(&after_open[..end], forms).map(|value| (value, end))
        });

        match substituted {
            Some((value, end)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                // Emit one brace and rescan, so "{{{camel}}" still matches.
                out.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}
