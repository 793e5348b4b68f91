//! Assemble the file set for one module.

use volt_core::{CanonicalForms, FileSet, ModuleName};
use volt_templates::{infra_catalog, module_catalog};

/// Compose the files for `name`.
///
/// Infrastructure files, when requested, come before the module files.
/// No filesystem access happens here.
pub fn compose(name: &ModuleName, include_infra: bool) -> FileSet {
    compose_forms(&name.forms(), include_infra)
}

/// Compose the files for already-derived canonical forms.
pub fn compose_forms(forms: &CanonicalForms, include_infra: bool) -> FileSet {
    let mut files: FileSet = module_catalog(forms)
        .iter()
        .map(|producer| producer.to_template_file())
        .collect();

    if include_infra {
        files.prepend(infra_catalog().iter().map(|producer| producer.to_template_file()));
    }

    debug_assert!(files.has_unique_paths(), "duplicate paths in file set");
    files
}

#[cfg(test)]
mod tests {
    use volt_templates::{INFRA_FILE_COUNT, MODULE_FILE_COUNT};

    use super::*;

    fn name(raw: &str) -> ModuleName {
        ModuleName::parse(raw).unwrap()
    }

    #[test]
    fn test_compose_without_infra() {
        let files = compose(&name("widget"), false);
        assert_eq!(files.len(), 7);
        assert_eq!(files.len(), MODULE_FILE_COUNT);
        assert_eq!(files.paths().next(), Some("_schemas/WidgetSchema.ts"));
    }

    #[test]
    fn test_compose_with_infra_prepends() {
        let files = compose(&name("widget"), true);
        let paths: Vec<&str> = files.paths().collect();

        assert_eq!(files.len(), 12);
        assert_eq!(files.len(), MODULE_FILE_COUNT + INFRA_FILE_COUNT);
        assert_eq!(
            &paths[..INFRA_FILE_COUNT],
            &[
                "hooks/use-form.tsx",
                "hooks/use-page.tsx",
                "hooks/use-user-preferences.ts",
                "services/user-preferences.ts",
                "constants/storage-keys.ts",
            ]
        );
        assert_eq!(paths[INFRA_FILE_COUNT], "_schemas/WidgetSchema.ts");
        assert_eq!(paths.last(), Some(&"layout.tsx"));
    }

    #[test]
    fn test_module_part_is_identical_with_or_without_infra() {
        let plain = compose(&name("user profile"), false);
        let with_infra = compose(&name("user profile"), true);

        let tail: Vec<_> = with_infra.iter().skip(INFRA_FILE_COUNT).cloned().collect();
        let plain: Vec<_> = plain.into_iter().collect();
        assert_eq!(tail, plain);
    }

    #[test]
    fn test_paths_are_unique() {
        for raw in ["widget", "user profile", "Hooks", "page", "a"] {
            for include_infra in [false, true] {
                let files = compose(&name(raw), include_infra);
                assert!(files.has_unique_paths(), "{raw} / {include_infra}");
            }
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(
            compose(&name("Sales Order"), true),
            compose(&name("Sales Order"), true)
        );
    }

    #[test]
    fn test_compose_forms_with_empty_forms() {
        let files = compose_forms(&CanonicalForms::derive(""), true);
        assert_eq!(files.len(), 12);
        assert!(files.has_unique_paths());
    }
}
