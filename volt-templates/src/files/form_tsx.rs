//! Create/edit form component generator.

use volt_core::{CanonicalForms, GeneratedFile};

use super::COMPONENTS_DIR;
use crate::template::render;

const TEMPLATE: &str = r#"'use client'

import { User, Mail, Phone, FileText, ToggleLeft } from 'lucide-react'
import { useFormHook, type FormAction, type FormConfig } from '@/hooks/use-form'
import { useCreate{{Pascal}}, useUpdate{{Pascal}} } from '../_api/mutations/{{kebab}}.mutations'
import { {{Pascal}}Schema, Create{{Pascal}}Schema, Update{{Pascal}}Schema, type {{Pascal}} } from '../_schemas/{{Pascal}}Schema'

interface {{Pascal}}FormProps {
  action: FormAction
  selectedItem?: {{Pascal}}
  closeForm: () => void
  open?: boolean
  onOpenChange?: (open: boolean) => void
  asModal?: boolean
}

export function {{Pascal}}Form(props: {{Pascal}}FormProps) {
  const { action, selectedItem } = props

  const create{{Pascal}} = useCreate{{Pascal}}()
  const update{{Pascal}} = useUpdate{{Pascal}}()

  const config: FormConfig<{{Pascal}}> = {
    title: {
      create: 'Create {{Pascal}}',
      read: 'View {{Pascal}}',
      update: 'Edit {{Pascal}}',
    },
    description: {
      create: 'Fill in the fields below to create a new {{camel}}.',
      read: 'Details of the selected {{camel}}.',
      update: 'Update the selected {{camel}}.',
    },
    schema: action === 'create' ? Create{{Pascal}}Schema : action === 'update' ? Update{{Pascal}}Schema : {{Pascal}}Schema,
    gridCols: 2,
    fields: [
      {
        name: 'name' as any,
        label: 'Name',
        type: 'text',
        placeholder: 'Full name',
        icon: <User className="h-4 w-4" />,
        className: 'col-span-2',
      },
      {
        name: 'description' as any,
        label: 'Description',
        type: 'textarea',
        placeholder: 'Optional description',
        icon: <FileText className="h-4 w-4" />,
        className: 'col-span-2',
        rows: 3,
      },
      {
        name: 'email' as any,
        label: 'Email',
        type: 'text',
        placeholder: 'email@example.com',
        icon: <Mail className="h-4 w-4" />,
      },
      {
        name: 'phone' as any,
        label: 'Phone',
        type: 'text',
        placeholder: '(555) 010-0000',
        icon: <Phone className="h-4 w-4" />,
      },
      {
        name: 'active' as any,
        label: 'Active',
        type: 'switch',
        description: 'Whether this {{camel}} is active',
        icon: <ToggleLeft className="h-4 w-4" />,
        className: 'col-span-2',
      },
    ],
    onSubmit: async (data, formAction) => {
      if (formAction === 'create') {
        await create{{Pascal}}.mutateAsync(data)
      } else if (formAction === 'update' && selectedItem?.id) {
        await update{{Pascal}}.mutateAsync({
          id: selectedItem.id,
          data: data,
        })
      }
    },
    isPending: create{{Pascal}}.isPending || update{{Pascal}}.isPending,
  }

  const { formComponent } = useFormHook({
    ...props,
    config,
  })

  return formComponent
}
"#;

/// The `_components/<Pascal>Form.tsx` file.
///
/// Builds on the shared `use-form` hook and imports its types from the
/// module schema.
pub struct FormTsx<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> FormTsx<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for FormTsx<'_> {
    fn path(&self) -> String {
        format!("{}/{}Form.tsx", COMPONENTS_DIR, self.forms.pascal())
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}
