//! Module names and the canonical forms derived from them.

use std::fmt;

use crate::{
    Error, Result,
    utils::{to_camel_case, to_kebab_case, to_pascal_case},
};

/// A validated, user-supplied module name.
///
/// Holds the trimmed input; construction fails for empty or
/// whitespace-only names and for names with characters other than
/// letters, digits, whitespace, `-` and `_`. Path separators and dots
/// never reach the module directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate a raw name.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Box::new(Error::EmptyModuleName));
        }
        if !trimmed.chars().all(is_name_char) {
            return Err(Box::new(Error::InvalidModuleName {
                name: trimmed.to_string(),
            }));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the Pascal/camel/kebab forms of this name.
    pub fn forms(&self) -> CanonicalForms {
        CanonicalForms::derive(&self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_'
}

/// The casing variants of a module name used across every generated file.
///
/// All three forms come from the same source string and cannot be edited
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForms {
    pascal: String,
    camel: String,
    kebab: String,
}

impl CanonicalForms {
    /// Derive the forms from a raw string.
    ///
    /// Prefer [`ModuleName::forms`]; this is exposed for callers that hold
    /// an already-validated name.
    pub fn derive(name: &str) -> Self {
        Self {
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            kebab: to_kebab_case(name),
        }
    }

    /// Type-level name (e.g., `UserProfile`)
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// Value-level name (e.g., `userProfile`)
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// File and cache-key name (e.g., `user-profile`)
    pub fn kebab(&self) -> &str {
        &self.kebab
    }
}
