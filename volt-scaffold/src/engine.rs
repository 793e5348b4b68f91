//! Write a composed file set to disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use volt_core::{Error, FileSet, Result};

use crate::TargetLayout;

/// Outcome of [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Absolute module directory
    pub module_dir: PathBuf,
    /// Absolute file paths in file-set order. In dry-run mode these were
    /// not written.
    pub paths: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Materialize `files` below the layout's module directory.
///
/// An existing module directory is always a conflict, even in dry-run mode,
/// and nothing is touched. In dry-run mode the target paths are returned
/// without any filesystem mutation.
///
/// There is no rollback: when a directory or file cannot be created the
/// error carries the files already written, which stay on disk.
pub fn materialize(
    layout: &TargetLayout,
    files: &FileSet,
    dry_run: bool,
) -> Result<Materialized> {
    let base = std::path::absolute(layout.base_path()).map_err(|source| {
        Box::new(Error::ResolvePath {
            path: layout.base_path().to_path_buf(),
            source,
        })
    })?;
    let layout = layout.rebased(base);
    let module_dir = layout.module_dir();

    // any entry counts, including a dangling symlink
    match fs::symlink_metadata(&module_dir) {
        Ok(_) => {
            tracing::debug!(path = %module_dir.display(), "module directory exists");
            return Err(Box::new(Error::Conflict { path: module_dir }));
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Box::new(Error::ResolvePath {
                path: module_dir,
                source,
            }));
        }
    }

    let paths: Vec<PathBuf> = files.iter().map(|file| file.target(&module_dir)).collect();

    if dry_run {
        tracing::debug!(count = paths.len(), "dry run, nothing written");
        return Ok(Materialized {
            module_dir,
            paths,
            dry_run,
        });
    }

    let mut written = Vec::with_capacity(paths.len());

    let features_dir = layout.features_dir();
    fs::create_dir_all(&features_dir)
        .map_err(|source| create_dir_error(&features_dir, &written, source))?;
    fs::create_dir(&module_dir)
        .map_err(|source| create_dir_error(&module_dir, &written, source))?;
    tracing::info!(path = %module_dir.display(), "created module directory");

    for (file, path) in files.iter().zip(&paths) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| create_dir_error(parent, &written, source))?;
        }
        fs::write(path, file.content()).map_err(|source| {
            Box::new(Error::Write {
                path: path.clone(),
                written: written.clone(),
                source,
            })
        })?;
        tracing::debug!(path = %path.display(), "wrote file");
        written.push(path.clone());
    }

    tracing::info!(count = written.len(), "module materialized");

    Ok(Materialized {
        module_dir,
        paths,
        dry_run,
    })
}

fn create_dir_error(path: &Path, written: &[PathBuf], source: io::Error) -> Box<Error> {
    Box::new(Error::CreateDir {
        path: path.to_path_buf(),
        written: written.to_vec(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use volt_core::{CanonicalForms, TemplateFile};

    use super::*;

    fn layout(base: &Path, name: &str) -> TargetLayout {
        TargetLayout::new(base, &CanonicalForms::derive(name))
    }

    fn file_set(entries: &[(&str, &str)]) -> FileSet {
        entries
            .iter()
            .map(|(path, content)| TemplateFile::new(*path, *content))
            .collect()
    }

    #[test]
    fn test_materialize_creates_files_and_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let files = file_set(&[("page.tsx", "page"), ("_api/queries/a.ts", "nested")]);

        let result = materialize(&layout(temp.path(), "widget"), &files, false).unwrap();

        let module_dir = temp.path().join("features").join("widget");
        assert!(!result.dry_run);
        assert_eq!(fs::read_to_string(module_dir.join("page.tsx")).unwrap(), "page");
        assert_eq!(
            fs::read_to_string(module_dir.join("_api").join("queries").join("a.ts")).unwrap(),
            "nested"
        );
        assert_eq!(result.paths.len(), 2);
        assert!(result.paths.iter().all(|path| path.is_absolute()));
    }

    #[test]
    fn test_materialize_reuses_existing_features_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("features").join("other")).unwrap();
        let files = file_set(&[("page.tsx", "page")]);

        materialize(&layout(temp.path(), "widget"), &files, false).unwrap();

        assert!(temp.path().join("features").join("other").is_dir());
        assert!(temp.path().join("features").join("widget").join("page.tsx").is_file());
    }

    #[test]
    fn test_existing_module_dir_is_a_conflict() {
        let temp = TempDir::new().unwrap();
        let module_dir = temp.path().join("features").join("widget");
        fs::create_dir_all(&module_dir).unwrap();
        let files = file_set(&[("page.tsx", "page")]);

        let err = materialize(&layout(temp.path(), "widget"), &files, false).unwrap_err();

        assert!(matches!(*err, Error::Conflict { .. }));
        assert!(!module_dir.join("page.tsx").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_a_conflict() {
        let temp = TempDir::new().unwrap();
        let features_dir = temp.path().join("features");
        fs::create_dir_all(&features_dir).unwrap();
        std::os::unix::fs::symlink(temp.path().join("missing"), features_dir.join("widget"))
            .unwrap();
        let files = file_set(&[("page.tsx", "page")]);

        for dry_run in [true, false] {
            let err = materialize(&layout(temp.path(), "widget"), &files, dry_run).unwrap_err();
            assert!(matches!(*err, Error::Conflict { .. }), "dry_run={dry_run}");
        }
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let files = file_set(&[("page.tsx", "page"), ("layout.tsx", "layout")]);

        let result = materialize(&layout(temp.path(), "widget"), &files, true).unwrap();

        assert!(result.dry_run);
        assert_eq!(result.paths.len(), 2);
        assert!(result.paths[0].ends_with("features/widget/page.tsx"));
        assert!(!temp.path().join("features").exists());
    }

    #[test]
    fn test_write_failure_keeps_earlier_files() {
        let temp = TempDir::new().unwrap();
        // `_api` as a plain file blocks the nested directory below it
        let files = file_set(&[
            ("page.tsx", "page"),
            ("_api", "not a directory"),
            ("_api/queries/a.ts", "unreachable"),
        ]);

        let err = materialize(&layout(temp.path(), "widget"), &files, false).unwrap_err();

        let module_dir = temp.path().join("features").join("widget");
        assert!(matches!(*err, Error::CreateDir { .. }));
        assert_eq!(err.written().len(), 2);
        assert!(module_dir.join("page.tsx").is_file());
        assert!(module_dir.join("_api").is_file());
    }
}
