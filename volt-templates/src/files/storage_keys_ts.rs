//! Storage keys constants generator.

use volt_core::GeneratedFile;

const CONTENT: &str = r#"export const STORAGE_KEYS = {
  USER_PREFERENCES: "volt_user_preferences",
  USER_PREFERENCES_SECRET: "volt_user_preferences_v1",
} as const;

export type StorageKey = (typeof STORAGE_KEYS)[keyof typeof STORAGE_KEYS];
"#;

/// The `constants/storage-keys.ts` file.
pub struct StorageKeysTs;

impl GeneratedFile for StorageKeysTs {
    fn path(&self) -> String {
        "constants/storage-keys.ts".to_string()
    }

    fn render(&self) -> String {
        CONTENT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_match_preferences_service() {
        let content = StorageKeysTs.render();
        let service = crate::files::UserPreferencesTs.render();

        assert!(content.contains("USER_PREFERENCES:"));
        assert!(content.contains("USER_PREFERENCES_SECRET:"));
        assert!(service.contains("import { STORAGE_KEYS } from \"@/constants/storage-keys\";"));
        assert!(service.contains("STORAGE_KEYS.USER_PREFERENCES;"));
    }
}
