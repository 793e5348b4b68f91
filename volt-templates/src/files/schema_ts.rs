//! zod schema generator.

use volt_core::{CanonicalForms, GeneratedFile};

use super::SCHEMAS_DIR;
use crate::template::render;

const TEMPLATE: &str = r#"import { z } from 'zod'

export const {{Pascal}}Schema = z.object({
  id: z.string().optional(),
  name: z.string().min(1, 'Name is required'),
  description: z.string().optional(),
  email: z.string().email('Invalid email').optional(),
  phone: z.string().optional(),
  active: z.boolean().default(true),
  createdAt: z.date().optional(),
  updatedAt: z.date().optional(),
})

export const Create{{Pascal}}Schema = {{Pascal}}Schema.omit({
  id: true,
  createdAt: true,
  updatedAt: true,
})

export const Update{{Pascal}}Schema = Create{{Pascal}}Schema.partial()

export type {{Pascal}} = z.infer<typeof {{Pascal}}Schema>
export type Create{{Pascal}} = z.infer<typeof Create{{Pascal}}Schema>
export type Update{{Pascal}} = z.infer<typeof Update{{Pascal}}Schema>
"#;

/// The `_schemas/<Pascal>Schema.ts` file.
pub struct SchemaTs<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> SchemaTs<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for SchemaTs<'_> {
    fn path(&self) -> String {
        format!("{}/{}Schema.ts", SCHEMAS_DIR, self.forms.pascal())
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}
