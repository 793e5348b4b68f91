//! Shared page hook generator.

use volt_core::GeneratedFile;

const CONTENT: &str = r#"import { ReactNode, useState, useEffect } from "react";
import { Button } from "@/components/ui/button";
import { usePermissions } from "@/hooks/use-permissions";
import { Toolbar } from "@/components/layout/toolbar";
import { Tabs, TabsContent } from "@/components/ui/tabs";
import { useTabPreference } from "@/hooks/use-user-preferences";

export interface PageAction {
  icon: ReactNode;
  label: string;
  onClick: () => void;
  disabled?: boolean;
  className?: string;
  permissionCheck?: (permissions: ReturnType<typeof usePermissions>) => boolean;
}

export interface EmptyAction {
  empty: true;
}

export const EMPTY_ACTION: EmptyAction = { empty: true };

export function usePage<
  const T extends readonly {
    value: string;
    label: string;
    permissionCheck?: (
      permissions: ReturnType<typeof usePermissions>
    ) => boolean;
  }[]
>(config: {
  title: string;
  defaultTab?: T[number]["value"];
  tabs: T;
  actions: { [K in T[number]["value"]]: PageAction | EmptyAction };
  content: { [K in T[number]["value"]]: ReactNode };
  customContent?: { [K in T[number]["value"]]?: ReactNode };
  persistTabs?: boolean;
}) {
  const {
    title,
    defaultTab,
    tabs,
    actions,
    content,
    customContent,
    persistTabs = true,
  } = config;

  const pageName = title.toLowerCase().replace(/\s+/g, "-");

  const { activeTab: savedTab, setActiveTab: saveTab } =
    useTabPreference(pageName);

  const initialTab = (persistTabs && savedTab) || defaultTab || tabs[0]?.value;
  const [currentTab, setCurrentTab] = useState(initialTab);

  const permissions = usePermissions();

  useEffect(() => {
    if (persistTabs && savedTab && savedTab !== currentTab) {
      setCurrentTab(savedTab);
    }
  }, [savedTab, currentTab, persistTabs]);

  const handleTabChange = (tabValue: string) => {
    setCurrentTab(tabValue);
    if (persistTabs) {
      saveTab(tabValue);
    }
  };

  const processedTabs = tabs.map((tab) => ({
    value: tab.value,
    label: tab.label,
    disabled: tab.permissionCheck ? !tab.permissionCheck(permissions) : false,
  }));

  const currentAction = actions[currentTab as T[number]["value"]];
  const currentCustomContent =
    customContent?.[currentTab as T[number]["value"]];

  const actionButton = currentCustomContent ? null : currentAction &&
    "empty" in currentAction ? null : currentAction &&
    (currentAction.permissionCheck
      ? currentAction.permissionCheck(permissions)
      : true) ? (
    <Button
      onClick={currentAction.onClick}
      disabled={currentAction.disabled}
      className={currentAction.className || "flex items-center w-[120px]"}
    >
      {currentAction.icon}
      {currentAction.label}
    </Button>
  ) : null;

  const toolbar = (
    <Toolbar
      title={title}
      tabs={processedTabs}
      actionButtons={actionButton}
      currentTab={currentTab}
    >
      {currentCustomContent}
    </Toolbar>
  );

  const page = (
    <Tabs value={currentTab} onValueChange={handleTabChange} className="w-full">
      {toolbar}
      {Object.entries(content).map(([tabValue, tabContent]) => (
        <TabsContent key={tabValue} value={tabValue} className="p-0 m-0 mt-2">
          {tabContent as ReactNode}
        </TabsContent>
      ))}
    </Tabs>
  );

  return {
    page,
    currentTab,
    setCurrentTab: handleTabChange,
  };
}
"#;

/// The `hooks/use-page.tsx` file.
pub struct UsePageTsx;

impl GeneratedFile for UsePageTsx {
    fn path(&self) -> String {
        "hooks/use-page.tsx".to_string()
    }

    fn render(&self) -> String {
        CONTENT.to_string()
    }
}
