//! Route entry generator.

use volt_core::{CanonicalForms, GeneratedFile};

use crate::template::render;

const TEMPLATE: &str = r#"'use client'

import { useState } from 'react'
import { Plus } from 'lucide-react'
import { usePage } from '@/hooks/use-page'
import { {{Pascal}}Table } from './_components/{{Pascal}}Table'
import { {{Pascal}}Form } from './_components/{{Pascal}}Form'
import type { {{Pascal}} } from './_schemas/{{Pascal}}Schema'

export default function {{Pascal}}Page() {
  const [selectedItem, setSelectedItem] = useState<{{Pascal}} | undefined>()
  const [formAction, setFormAction] = useState<'create' | 'read' | 'update'>('create')
  const [isFormOpen, setIsFormOpen] = useState(false)

  const handleCreate = () => {
    setSelectedItem(undefined)
    setFormAction('create')
    setIsFormOpen(true)
  }

  const handleView = (item: {{Pascal}}) => {
    setSelectedItem(item)
    setFormAction('read')
    setIsFormOpen(true)
  }

  const handleEdit = (item: {{Pascal}}) => {
    setSelectedItem(item)
    setFormAction('update')
    setIsFormOpen(true)
  }

  const closeForm = () => {
    setIsFormOpen(false)
    setSelectedItem(undefined)
  }

  const { page } = usePage({
    title: '{{Pascal}}',
    persistTabs: false,
    tabs: [
      { value: 'list', label: 'List' },
    ] as const,
    actions: {
      list: {
        icon: <Plus className="mr-1 h-4 w-4" />,
        label: 'New',
        onClick: handleCreate,
      },
    },
    content: {
      list: (
        <{{Pascal}}Table
          onView={handleView}
          onEdit={handleEdit}
        />
      ),
    },
  })

  return (
    <div className="space-y-4">
      {page}

      <{{Pascal}}Form
        action={formAction}
        selectedItem={selectedItem}
        closeForm={closeForm}
        open={isFormOpen}
        onOpenChange={setIsFormOpen}
        asModal={true}
      />
    </div>
  )
}
"#;

/// The `page.tsx` route entry.
pub struct PageTsx<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> PageTsx<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for PageTsx<'_> {
    fn path(&self) -> String {
        "page.tsx".to_string()
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}
