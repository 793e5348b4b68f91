//! File-set composition and materialization for the volt module scaffolder.
//!
//! The flow for one run is:
//!
//! 1. validate a [`ModuleName`](volt_core::ModuleName) and derive its canonical forms
//! 2. [`compose`] the ordered [`FileSet`](volt_core::FileSet)
//! 3. [`materialize`] it below a [`TargetLayout`], or preview the paths with `dry_run`
//!
//! ```no_run
//! use std::path::Path;
//!
//! use volt_core::ModuleName;
//! use volt_scaffold::{TargetLayout, compose_forms, materialize};
//!
//! let name = ModuleName::parse("widget").unwrap();
//! let forms = name.forms();
//! let files = compose_forms(&forms, false);
//! let layout = TargetLayout::new(Path::new("app"), &forms);
//!
//! let result = materialize(&layout, &files, true).unwrap();
//! assert_eq!(result.paths.len(), 7);
//! ```

mod compose;
mod engine;
mod layout;

pub use compose::{compose, compose_forms};
pub use engine::{Materialized, materialize};
pub use layout::{FEATURES_DIR, TargetLayout};
