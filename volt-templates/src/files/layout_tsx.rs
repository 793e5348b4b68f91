//! Layout wrapper generator.

use volt_core::{CanonicalForms, GeneratedFile};

use crate::template::render;

const TEMPLATE: &str = r#"export default function {{Pascal}}Layout({
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
"#;

/// The `layout.tsx` wrapper.
pub struct LayoutTsx<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> LayoutTsx<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for LayoutTsx<'_> {
    fn path(&self) -> String {
        "layout.tsx".to_string()
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}
