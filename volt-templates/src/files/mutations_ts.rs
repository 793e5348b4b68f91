//! Mutation hooks generator.

use volt_core::{CanonicalForms, GeneratedFile};

use super::MUTATIONS_DIR;
use crate::template::render;

const TEMPLATE: &str = r#"import { useMutation, useQueryClient } from '@tanstack/react-query'
import type { {{Pascal}}, Create{{Pascal}}, Update{{Pascal}} } from '../../_schemas/{{Pascal}}Schema'
import { {{camel}}Keys } from '../queries/{{kebab}}.queries'

export function useCreate{{Pascal}}() {
  const queryClient = useQueryClient()

  return useMutation({
    mutationFn: async (data: Create{{Pascal}}): Promise<{{Pascal}}> => {
      // Simulate API call
      await new Promise(resolve => setTimeout(resolve, 1000))

      const new{{Pascal}}: {{Pascal}} = {
        ...data,
        id: Date.now().toString(),
        createdAt: new Date(),
        updatedAt: new Date(),
      }

      console.log('Creating {{camel}}:', new{{Pascal}})
      return new{{Pascal}}
    },
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.lists() })
    },
    onError: (error) => {
      console.error('Error creating {{camel}}:', error)
    },
  })
}

export function useUpdate{{Pascal}}() {
  const queryClient = useQueryClient()

  return useMutation({
    mutationFn: async ({ id, data }: { id: string; data: Update{{Pascal}} }): Promise<{{Pascal}}> => {
      // Simulate API call
      await new Promise(resolve => setTimeout(resolve, 1000))

      const updated{{Pascal}}: {{Pascal}} = {
        id,
        name: data.name || '',
        description: data.description,
        email: data.email,
        phone: data.phone,
        active: data.active ?? true,
        updatedAt: new Date(),
        createdAt: new Date(),
      }

      console.log('Updating {{camel}}:', updated{{Pascal}})
      return updated{{Pascal}}
    },
    onSuccess: (data) => {
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.lists() })
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.detail(data.id!) })
    },
    onError: (error) => {
      console.error('Error updating {{camel}}:', error)
    },
  })
}

export function useDelete{{Pascal}}() {
  const queryClient = useQueryClient()

  return useMutation({
    mutationFn: async (id: string): Promise<void> => {
      // Simulate API call
      await new Promise(resolve => setTimeout(resolve, 1000))

      console.log('Deleting {{camel}}:', id)
    },
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.lists() })
    },
    onError: (error) => {
      console.error('Error deleting {{camel}}:', error)
    },
  })
}
"#;

/// The `_api/mutations/<kebab>.mutations.ts` file.
pub struct MutationsTs<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> MutationsTs<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for MutationsTs<'_> {
    fn path(&self) -> String {
        format!("{}/{}.mutations.ts", MUTATIONS_DIR, self.forms.kebab())
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_path() {
        let forms = CanonicalForms::derive("order_item");
        assert_eq!(
            MutationsTs::new(&forms).path(),
            "_api/mutations/order-item.mutations.ts"
        );
    }

    #[test]
    fn test_mutations_invalidate_module_keys() {
        let forms = CanonicalForms::derive("order_item");
        let content = MutationsTs::new(&forms).render();

        assert!(content.contains("import { orderItemKeys } from '../queries/order-item.queries'"));
        assert!(content.contains("export function useCreateOrderItem()"));
        assert!(content.contains("export function useUpdateOrderItem()"));
        assert!(content.contains("export function useDeleteOrderItem()"));
        assert_eq!(
            content
                .matches("queryClient.invalidateQueries({ queryKey: orderItemKeys.lists() })")
                .count(),
            3
        );
    }
}
