use std::path::{Path, PathBuf};

/// Trait for template producers.
///
/// Implementors are pure: rendering the same producer twice yields
/// byte-identical content.
pub trait GeneratedFile {
    /// Path relative to the module directory, using `/` separators
    fn path(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a [`TemplateFile`]
    fn to_template_file(&self) -> TemplateFile {
        TemplateFile::new(self.path(), self.render())
    }
}

/// A rendered file, ready to be written below a module directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    relative_path: String,
    content: String,
}

impl TemplateFile {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Get the path relative to the module directory
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Resolve this file's location below `dir`.
    pub fn target(&self, dir: &Path) -> PathBuf {
        self.relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(dir.to_path_buf(), |path, segment| path.join(segment))
    }
}

/// An ordered list of files produced for one scaffolding run.
///
/// Order only affects how previews and progress are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<TemplateFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: TemplateFile) {
        self.files.push(file);
    }

    /// Insert `files` ahead of the current entries, keeping their order.
    pub fn prepend(&mut self, files: impl IntoIterator<Item = TemplateFile>) {
        let mut head: Vec<TemplateFile> = files.into_iter().collect();
        head.append(&mut self.files);
        self.files = head;
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateFile> {
        self.files.iter()
    }

    /// Relative paths in order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(TemplateFile::relative_path)
    }

    /// Check that no two entries share a relative path.
    pub fn has_unique_paths(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.paths().all(|path| seen.insert(path))
    }
}

impl FromIterator<TemplateFile> for FileSet {
    fn from_iter<I: IntoIterator<Item = TemplateFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileSet {
    type Item = TemplateFile;
    type IntoIter = std::vec::IntoIter<TemplateFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a TemplateFile;
    type IntoIter = std::slice::Iter<'a, TemplateFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Readme;

    impl GeneratedFile for Readme {
        fn path(&self) -> String {
            "docs/README.md".to_string()
        }

        fn render(&self) -> String {
            "# readme\n".to_string()
        }
    }

    #[test]
    fn test_to_template_file() {
        let file = Readme.to_template_file();
        assert_eq!(file.relative_path(), "docs/README.md");
        assert_eq!(file.content(), "# readme\n");
    }

    #[test]
    fn test_target_joins_segments() {
        let file = TemplateFile::new("_api/queries/widget.queries.ts", "");
        let target = file.target(Path::new("/tmp/app"));
        assert_eq!(
            target,
            Path::new("/tmp/app")
                .join("_api")
                .join("queries")
                .join("widget.queries.ts")
        );
    }

    #[test]
    fn test_prepend_keeps_order() {
        let mut set: FileSet = [TemplateFile::new("c", ""), TemplateFile::new("d", "")]
            .into_iter()
            .collect();
        set.prepend([TemplateFile::new("a", ""), TemplateFile::new("b", "")]);

        assert_eq!(set.paths().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_has_unique_paths() {
        let mut set = FileSet::new();
        set.push(TemplateFile::new("page.tsx", ""));
        set.push(TemplateFile::new("layout.tsx", ""));
        assert!(set.has_unique_paths());

        set.push(TemplateFile::new("page.tsx", "again"));
        assert!(!set.has_unique_paths());
    }

    #[test]
    fn test_empty_set() {
        let set = FileSet::new();
        assert!(set.is_empty());
        assert!(set.has_unique_paths());
    }
}
