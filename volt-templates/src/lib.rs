//! Template catalog for the volt module scaffolder.
//!
//! This crate holds the fixed set of template producers used to build a
//! Next.js App Router feature module. Producers are pure: they take the
//! canonical forms of a module name and return file content.
//!
//! # Usage
//!
//! ```
//! use volt_core::{GeneratedFile, ModuleName};
//! use volt_templates::module_catalog;
//!
//! let forms = ModuleName::parse("user profile").unwrap().forms();
//! let paths: Vec<String> = module_catalog(&forms).iter().map(|f| f.path()).collect();
//!
//! assert_eq!(paths[0], "_schemas/UserProfileSchema.ts");
//! ```
//!
//! # Generated Output
//!
//! Module-scoped files, relative to `features/<module>/`:
//!
//! - `_schemas/<Pascal>Schema.ts` - zod schemas and inferred types
//! - `_api/queries/<kebab>.queries.ts` - cache keys and list/detail queries
//! - `_api/mutations/<kebab>.mutations.ts` - create/update/delete mutations
//! - `_components/<Pascal>Table.tsx` - list view with filters
//! - `_components/<Pascal>Form.tsx` - create/read/update form
//! - `page.tsx`, `layout.tsx` - route entry and wrapper
//!
//! Shared infrastructure files (opt-in, not parameterized by the name):
//! `hooks/use-form.tsx`, `hooks/use-page.tsx`, `hooks/use-user-preferences.ts`,
//! `services/user-preferences.ts`, `constants/storage-keys.ts`.

mod catalog;
mod template;

pub mod files;

pub use catalog::{INFRA_FILE_COUNT, MODULE_FILE_COUNT, infra_catalog, module_catalog};
