//! The fixed, ordered template catalogs.

use volt_core::{CanonicalForms, GeneratedFile};

use crate::files::{
    FormTsx, LayoutTsx, MutationsTs, PageTsx, QueriesTs, SchemaTs, StorageKeysTs, TableTsx,
    UseFormTsx, UsePageTsx, UseUserPreferencesTs, UserPreferencesTs,
};

/// Number of files in the module-scoped catalog
pub const MODULE_FILE_COUNT: usize = 7;
/// Number of files in the infrastructure catalog
pub const INFRA_FILE_COUNT: usize = 5;

/// Producers for one feature module, in presentation order.
pub fn module_catalog(forms: &CanonicalForms) -> Vec<Box<dyn GeneratedFile + '_>> {
    vec![
        Box::new(SchemaTs::new(forms)),
        Box::new(QueriesTs::new(forms)),
        Box::new(MutationsTs::new(forms)),
        Box::new(TableTsx::new(forms)),
        Box::new(FormTsx::new(forms)),
        Box::new(PageTsx::new(forms)),
        Box::new(LayoutTsx::new(forms)),
    ]
}

/// Name-independent producers for shared hooks, services and constants.
pub fn infra_catalog() -> Vec<Box<dyn GeneratedFile>> {
    vec![
        Box::new(UseFormTsx),
        Box::new(UsePageTsx),
        Box::new(UseUserPreferencesTs),
        Box::new(UserPreferencesTs),
        Box::new(StorageKeysTs),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_catalog_order() {
        let forms = CanonicalForms::derive("user profile");
        let paths: Vec<String> = module_catalog(&forms).iter().map(|f| f.path()).collect();

        assert_eq!(
            paths,
            vec![
                "_schemas/UserProfileSchema.ts",
                "_api/queries/user-profile.queries.ts",
                "_api/mutations/user-profile.mutations.ts",
                "_components/UserProfileTable.tsx",
                "_components/UserProfileForm.tsx",
                "page.tsx",
                "layout.tsx",
            ]
        );
        assert_eq!(paths.len(), MODULE_FILE_COUNT);
    }

    #[test]
    fn test_infra_catalog_order() {
        let paths: Vec<String> = infra_catalog().iter().map(|f| f.path()).collect();

        assert_eq!(
            paths,
            vec![
                "hooks/use-form.tsx",
                "hooks/use-page.tsx",
                "hooks/use-user-preferences.ts",
                "services/user-preferences.ts",
                "constants/storage-keys.ts",
            ]
        );
        assert_eq!(paths.len(), INFRA_FILE_COUNT);
    }

    #[test]
    fn test_producers_are_pure() {
        let forms = CanonicalForms::derive("widget");
        let first: Vec<String> = module_catalog(&forms).iter().map(|f| f.render()).collect();
        let second: Vec<String> = module_catalog(&forms).iter().map(|f| f.render()).collect();
        assert_eq!(first, second);

        let infra_first: Vec<String> = infra_catalog().iter().map(|f| f.render()).collect();
        let infra_second: Vec<String> = infra_catalog().iter().map(|f| f.render()).collect();
        assert_eq!(infra_first, infra_second);
    }

    #[test]
    fn test_empty_forms_still_produce_full_catalog() {
        let forms = CanonicalForms::derive("");
        let catalog = module_catalog(&forms);

        assert_eq!(catalog.len(), MODULE_FILE_COUNT);
        assert_eq!(catalog[0].path(), "_schemas/Schema.ts");
    }
}
