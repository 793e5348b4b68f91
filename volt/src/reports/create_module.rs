//! Create-module report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from creating (or previewing) a module.
#[derive(Debug)]
pub struct CreateModuleReport {
    /// Module name as entered, trimmed.
    pub name: String,
    /// Directory name below `features/`.
    pub dir_name: String,
    /// Module directory relative to the base (e.g., `features/widget`).
    pub relative_dir: String,
    /// Files written, or that would be written in a dry run.
    pub paths: Vec<PathBuf>,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl Report for CreateModuleReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.info("DRY RUN - Files that would be created:");
            for path in &self.paths {
                out.list_item(&path.display().to_string());
            }
            return;
        }

        for path in &self.paths {
            out.success(&format!("Created: {}", path.display()));
        }

        out.success(&format!(
            "Module \"{}\" created successfully in {}",
            self.name, self.relative_dir
        ));
        out.info("Next steps:");
        out.numbered_item(
            1,
            &format!(
                "Add route: import \"./{}/{}\"",
                self.relative_dir, self.dir_name
            ),
        );
        out.numbered_item(2, &format!("Navigate to: /{}", self.dir_name));
    }
}
