use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scaffolding operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("module name is required")]
    #[diagnostic(
        code(volt::empty_module_name),
        help("pass a name such as 'user profile' or 'invoices'")
    )]
    EmptyModuleName,

    #[error("invalid module name '{name}'")]
    #[diagnostic(
        code(volt::invalid_module_name),
        help("use only letters, digits, spaces, hyphens and underscores")
    )]
    InvalidModuleName { name: String },

    #[error("directory '{}' already exists", .path.display())]
    #[diagnostic(
        code(volt::module_exists),
        help("choose another module name or remove the existing directory")
    )]
    Conflict { path: PathBuf },

    #[error("failed to resolve '{}'", .path.display())]
    #[diagnostic(code(volt::resolve_path))]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{}'", .path.display())]
    #[diagnostic(
        code(volt::create_dir),
        help("files written before the failure are left on disk")
    )]
    CreateDir {
        path: PathBuf,
        written: Vec<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(
        code(volt::write_file),
        help("files written before the failure are left on disk")
    )]
    Write {
        path: PathBuf,
        written: Vec<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Files written before the operation failed.
    ///
    /// Scaffolding does not roll back, so these remain on disk.
    pub fn written(&self) -> &[PathBuf] {
        match self {
            Error::CreateDir { written, .. } | Error::Write { written, .. } => written,
            _ => &[],
        }
    }
}
