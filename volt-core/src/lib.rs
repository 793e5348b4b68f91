//! Core utilities and types for the volt module scaffolder.
//!
//! This crate provides the naming primitives, file types and error
//! taxonomy shared by the template catalog, the scaffolding engine
//! and the `volt` binary.

mod error;
mod file;
mod names;
mod utils;

// Errors
pub use error::{Error, Result};
// File types
pub use file::{FileSet, GeneratedFile, TemplateFile};
// Module naming
pub use names::{CanonicalForms, ModuleName};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case};
