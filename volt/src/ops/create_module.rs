//! Create module operation - compose and write a feature module.

use std::path::Path;

use volt_core::{ModuleName, Result};
use volt_scaffold::{TargetLayout, compose_forms, materialize};

use crate::reports::CreateModuleReport;

/// Options for the create-module operation.
pub struct CreateModuleOptions<'a> {
    /// Directory that holds (or will hold) `features/`.
    pub base_path: &'a Path,
    /// Validated module name.
    pub name: &'a ModuleName,
    /// Whether to add the shared hooks, services and constants.
    pub include_infra: bool,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the create-module operation.
///
/// Fails without touching the disk when the module directory already exists.
pub fn create_module(opts: CreateModuleOptions) -> Result<CreateModuleReport> {
    let forms = opts.name.forms();
    let files = compose_forms(&forms, opts.include_infra);
    let layout = TargetLayout::new(opts.base_path, &forms);

    tracing::info!(
        name = %opts.name,
        files = files.len(),
        dry_run = opts.dry_run,
        "creating module"
    );

    let result = materialize(&layout, &files, opts.dry_run)?;

    Ok(CreateModuleReport {
        name: opts.name.to_string(),
        dir_name: layout.module_dir_name().to_string(),
        relative_dir: layout.display_module_dir(),
        paths: result.paths,
        dry_run: result.dry_run,
    })
}
