//! Snapshot and consistency tests for the template catalog.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use volt_core::{CanonicalForms, GeneratedFile};
use volt_templates::{infra_catalog, module_catalog};

/// Render the module catalog into (path, content) pairs.
fn render_module(name: &str) -> Vec<(String, String)> {
    let forms = CanonicalForms::derive(name);
    module_catalog(&forms)
        .iter()
        .map(|f| (f.path(), f.render()))
        .collect()
}

/// Get a specific file from the rendered output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

/// Relative module specifiers (`./x`, `../x`) imported by a file.
fn relative_imports(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter_map(|line| {
            let start = line.find("from '")? + "from '".len();
            let end = line[start..].find('\'')? + start;
            let spec = &line[start..end];
            spec.starts_with('.').then_some(spec)
        })
        .collect()
}

/// Resolve `spec` against the directory of `from`, both `/`-separated.
fn resolve(from: &str, spec: &str) -> String {
    let mut segments: Vec<&str> = from.split('/').collect();
    segments.pop();
    for part in spec.split('/') {
        match part {
            "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[test]
fn test_layout_snapshot() {
    let files = render_module("widget");
    let layout = get_file(&files, "layout.tsx").expect("layout.tsx not found");

    insta::assert_snapshot!(layout, @r#"
export default function WidgetLayout({
  children,
}: {
  children: React.ReactNode
}) {
  return (
    <div className="container mx-auto p-6">
      <div className="space-y-6">
        {children}
      </div>
    </div>
  )
}
"#);
}

#[test]
fn test_relative_imports_resolve_within_module() {
    for name in ["widget", "user profile", "SalesOrder", "line_item"] {
        let files = render_module(name);
        let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();

        for (path, content) in &files {
            for spec in relative_imports(content) {
                let target = resolve(path, spec);
                let found = paths
                    .iter()
                    .any(|p| *p == format!("{target}.ts") || *p == format!("{target}.tsx"));
                assert!(found, "{path} imports '{spec}' which is not generated for '{name}'");
            }
        }
    }
}

#[test]
fn test_only_schema_and_layout_are_self_contained() {
    let files = render_module("widget");
    for (path, content) in &files {
        let imports = relative_imports(content);
        if path == "layout.tsx" || path.starts_with("_schemas/") {
            assert!(imports.is_empty());
        } else {
            assert!(!imports.is_empty(), "{path} has no relative imports");
        }
    }
}

#[test]
fn test_no_placeholders_left_in_module_files() {
    let files = render_module("user profile");
    for (path, content) in &files {
        for placeholder in ["{{Pascal}}", "{{camel}}", "{{kebab}}"] {
            assert!(
                !content.contains(placeholder),
                "{path} still contains {placeholder}"
            );
        }
    }
}

#[test]
fn test_forms_appear_where_expected() {
    let files = render_module("user profile");

    let queries =
        get_file(&files, "_api/queries/user-profile.queries.ts").expect("queries not found");
    assert!(queries.contains("all: ['user-profile'] as const,"));

    let page = get_file(&files, "page.tsx").expect("page.tsx not found");
    assert!(page.contains("export default function UserProfilePage()"));

    let table = get_file(&files, "_components/UserProfileTable.tsx").expect("table not found");
    assert!(table.contains("userProfileList.map((userProfile) => ("));
}

#[test]
fn test_infra_files_are_name_independent() {
    let rendered: Vec<String> = infra_catalog().iter().map(|f| f.render()).collect();
    for content in &rendered {
        assert!(!content.contains("{{Pascal}}"));
        assert!(!content.contains("{{camel}}"));
        assert!(!content.contains("{{kebab}}"));
        assert!(content.ends_with('\n'));
    }
}

#[test]
fn test_use_form_keeps_template_literals() {
    let use_form = infra_catalog()
        .into_iter()
        .find(|f| f.path() == "hooks/use-form.tsx")
        .expect("use-form not found")
        .render();

    assert!(use_form.contains("export function useFormHook<T extends FieldValues>"));
    assert!(use_form.contains("message: `Failed to save: ${error.message}`,"));
    assert!(use_form.contains(r#"/^\d+$/.test(value)"#));
}
