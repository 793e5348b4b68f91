//! Where a module lands on disk.

use std::path::{Path, PathBuf};

use volt_core::CanonicalForms;

/// Name of the directory holding all feature modules
pub const FEATURES_DIR: &str = "features";

/// Destination of one module: `<base>/features/<module>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    base_path: PathBuf,
    features_dir_name: String,
    module_dir_name: String,
}

impl TargetLayout {
    /// Layout for a module below `base_path`.
    ///
    /// The module directory uses the kebab-case form, so `"User Profile"`
    /// lands in `features/user-profile`.
    pub fn new(base_path: impl Into<PathBuf>, forms: &CanonicalForms) -> Self {
        Self {
            base_path: base_path.into(),
            features_dir_name: FEATURES_DIR.to_string(),
            module_dir_name: forms.kebab().to_string(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn module_dir_name(&self) -> &str {
        &self.module_dir_name
    }

    /// `<base>/features`
    pub fn features_dir(&self) -> PathBuf {
        self.base_path.join(&self.features_dir_name)
    }

    /// `<base>/features/<module>`, the module's home directory
    pub fn module_dir(&self) -> PathBuf {
        self.features_dir().join(&self.module_dir_name)
    }

    /// Same layout below a different base directory.
    pub(crate) fn rebased(&self, base_path: PathBuf) -> Self {
        Self {
            base_path,
            ..self.clone()
        }
    }

    /// Module directory relative to the base, always `/`-separated
    /// (e.g., `features/user-profile`).
    pub fn display_module_dir(&self) -> String {
        format!("{}/{}", self.features_dir_name, self.module_dir_name)
    }
}
