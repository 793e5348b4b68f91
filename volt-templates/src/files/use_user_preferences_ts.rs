//! User preferences hooks generator.

use volt_core::GeneratedFile;

const CONTENT: &str = r#"import { useState, useCallback } from "react";
import { userPreferencesService } from "@/services/user-preferences";

// user preferences
export function useUserPreferences() {
  const [preferences, setPreferences] = useState(() =>
    userPreferencesService.getAll()
  );

  const forceUpdate = useCallback(() => {
    setPreferences(userPreferencesService.getAll());
  }, []);

  const getActiveTab = useCallback((pageName: string) => {
    return userPreferencesService.getActiveTab(pageName);
  }, []);

  const setActiveTab = useCallback(
    (pageName: string, tabValue: string) => {
      userPreferencesService.setActiveTab(pageName, tabValue);
      forceUpdate();
    },
    [forceUpdate]
  );

  const getPreference = useCallback(<T>(key: string): T | undefined => {
    return userPreferencesService.get<T>(key);
  }, []);

  const setPreference = useCallback(
    (key: string, value: any) => {
      userPreferencesService.set(key, value);
      forceUpdate();
    },
    [forceUpdate]
  );

  const clearPreferences = useCallback(() => {
    userPreferencesService.clear();
    forceUpdate();
  }, [forceUpdate]);

  return {
    // tabs
    getActiveTab,
    setActiveTab,

    // generic preferences
    getPreference,
    setPreference,
    clearPreferences,

    preferences,
  };
}

// persisted tab selection
export function useTabPreference(pageName: string) {
  const { getActiveTab, setActiveTab } = useUserPreferences();

  const activeTab = getActiveTab(pageName);

  const setTab = useCallback(
    (tabValue: string) => {
      setActiveTab(pageName, tabValue);
    },
    [pageName, setActiveTab]
  );

  return {
    activeTab,
    setActiveTab: setTab,
  };
}

// sidebar state
export function useSidebarPreferences() {
  const [, forceUpdate] = useState(0);

  const triggerUpdate = useCallback(() => {
    forceUpdate((prev) => prev + 1);
  }, []);

  const getSectionState = useCallback((sectionKey: string): boolean => {
    return userPreferencesService.getSidebarSectionState(sectionKey);
  }, []);

  const setSectionState = useCallback(
    (sectionKey: string, isOpen: boolean) => {
      userPreferencesService.setSidebarSectionState(sectionKey, isOpen);
      triggerUpdate();
    },
    [triggerUpdate]
  );

  const searchTerm = userPreferencesService.getSidebarSearchTerm();

  const setSearchTerm = useCallback(
    (term: string) => {
      userPreferencesService.setSidebarSearchTerm(term);
      triggerUpdate();
    },
    [triggerUpdate]
  );

  return {
    getSectionState,
    setSectionState,
    searchTerm,
    setSearchTerm,
  };
}
"#;

/// The `hooks/use-user-preferences.ts` file.
pub struct UseUserPreferencesTs;

impl GeneratedFile for UseUserPreferencesTs {
    fn path(&self) -> String {
        "hooks/use-user-preferences.ts".to_string()
    }

    fn render(&self) -> String {
        CONTENT.to_string()
    }
}
