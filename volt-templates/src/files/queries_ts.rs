//! Query hooks generator.

use volt_core::{CanonicalForms, GeneratedFile};

use super::QUERIES_DIR;
use crate::template::render;

const TEMPLATE: &str = r#"import { useQuery } from '@tanstack/react-query'
import type { {{Pascal}} } from '../../_schemas/{{Pascal}}Schema'

// Mock data - replace with your API calls
const mock{{Pascal}}Data: {{Pascal}}[] = [
  {
    id: '1',
    name: 'Ada Lovelace',
    description: 'Full stack developer',
    email: 'ada@example.com',
    phone: '(555) 010-0001',
    active: true,
    createdAt: new Date('2024-01-01'),
    updatedAt: new Date('2024-01-01'),
  },
  {
    id: '2',
    name: 'Grace Hopper',
    description: 'UX/UI designer',
    email: 'grace@example.com',
    phone: '(555) 010-0002',
    active: true,
    createdAt: new Date('2024-01-02'),
    updatedAt: new Date('2024-01-02'),
  },
  {
    id: '3',
    name: 'Alan Turing',
    description: 'Systems analyst',
    email: 'alan@example.com',
    phone: '(555) 010-0003',
    active: false,
    createdAt: new Date('2024-01-03'),
    updatedAt: new Date('2024-01-03'),
  },
]

export const {{camel}}Keys = {
  all: ['{{kebab}}'] as const,
  lists: () => [...{{camel}}Keys.all, 'list'] as const,
  list: (filters: any) => [...{{camel}}Keys.lists(), { filters }] as const,
  details: () => [...{{camel}}Keys.all, 'detail'] as const,
  detail: (id: string) => [...{{camel}}Keys.details(), id] as const,
}

export function use{{Pascal}}List(filters?: { search?: string; active?: boolean }) {
  return useQuery({
    queryKey: {{camel}}Keys.list(filters),
    queryFn: async (): Promise<{{Pascal}}[]> => {
      // Simulate API call
      await new Promise(resolve => setTimeout(resolve, 500))

      let filtered = mock{{Pascal}}Data

      if (filters?.search) {
        const search = filters.search.toLowerCase()
        filtered = filtered.filter(item =>
          item.name?.toLowerCase().includes(search) ||
          item.description?.toLowerCase().includes(search) ||
          item.email?.toLowerCase().includes(search)
        )
      }

      if (filters?.active !== undefined) {
        filtered = filtered.filter(item => item.active === filters.active)
      }

      return filtered
    },
  })
}

export function use{{Pascal}}(id: string) {
  return useQuery({
    queryKey: {{camel}}Keys.detail(id),
    queryFn: async (): Promise<{{Pascal}}> => {
      // Simulate API call
      await new Promise(resolve => setTimeout(resolve, 300))

      const item = mock{{Pascal}}Data.find(item => item.id === id)
      if (!item) {
        throw new Error('{{Pascal}} not found')
      }

      return item
    },
    enabled: !!id,
  })
}
"#;

/// The `_api/queries/<kebab>.queries.ts` file.
///
/// Cache keys form a hierarchy rooted at the kebab-case module name, so
/// mutations can invalidate lists and details independently.
pub struct QueriesTs<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> QueriesTs<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for QueriesTs<'_> {
    fn path(&self) -> String {
        format!("{}/{}.queries.ts", QUERIES_DIR, self.forms.kebab())
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}
