//! List/table component generator.

use volt_core::{CanonicalForms, GeneratedFile};

use super::COMPONENTS_DIR;
use crate::template::render;

const TEMPLATE: &str = r#"'use client'

import { useState } from 'react'
import { Eye, Edit, Trash2 } from 'lucide-react'
import { use{{Pascal}}List } from '../_api/queries/{{kebab}}.queries'
import { useDelete{{Pascal}} } from '../_api/mutations/{{kebab}}.mutations'
import type { {{Pascal}} } from '../_schemas/{{Pascal}}Schema'
import {
  Table,
  TableBody,
  TableCell,
  TableHead,
  TableHeader,
  TableRow,
} from '@/components/ui/table'
import { Button } from '@/components/ui/button'
import { Badge } from '@/components/ui/badge'
import { ConfirmationDialog } from '@/components/custom/ConfirmationDialog'
import { LoadingSpinner } from '@/components/ui/loading-spinner'
import { Input } from '@/components/ui/input'
import { Switch } from '@/components/ui/switch'
import { Label } from '@/components/ui/label'

interface {{Pascal}}TableProps {
  onView: (item: {{Pascal}}) => void
  onEdit: (item: {{Pascal}}) => void
}

export function {{Pascal}}Table({ onView, onEdit }: {{Pascal}}TableProps) {
  const [filters, setFilters] = useState({
    search: '',
    active: undefined as boolean | undefined,
  })
  const [deleteId, setDeleteId] = useState<string | null>(null)

  const { data: {{camel}}List = [], isLoading, error } = use{{Pascal}}List(filters)
  const delete{{Pascal}} = useDelete{{Pascal}}()

  const handleDelete = async () => {
    if (!deleteId) return

    try {
      await delete{{Pascal}}.mutateAsync(deleteId)
      setDeleteId(null)
    } catch (error) {
      console.error('Error deleting {{camel}}:', error)
    }
  }

  const clearFilters = () => {
    setFilters({ search: '', active: undefined })
  }

  if (isLoading) {
    return (
      <div className="flex justify-center py-8">
        <LoadingSpinner />
      </div>
    )
  }

  if (error) {
    return (
      <div className="text-center py-8 text-red-600">
        Failed to load data: {error.message}
      </div>
    )
  }

  return (
    <div className="space-y-4">
      {/* Filters */}
      <div className="flex gap-4 p-4 bg-gray-50 rounded-lg">
        <div className="flex-1">
          <Label htmlFor="search">Search</Label>
          <Input
            id="search"
            placeholder="Name, description or email..."
            value={filters.search}
            onChange={(e) => setFilters(prev => ({ ...prev, search: e.target.value }))}
          />
        </div>
        <div className="flex items-center space-x-2">
          <Switch
            id="active-filter"
            checked={filters.active === true}
            onCheckedChange={(checked) =>
              setFilters(prev => ({ ...prev, active: checked ? true : undefined }))
            }
          />
          <Label htmlFor="active-filter">Active only</Label>
        </div>
        <Button variant="outline" onClick={clearFilters}>
          Clear filters
        </Button>
      </div>

      {/* Table */}
      <div className="rounded-md border">
        <Table>
          <TableHeader>
            <TableRow>
              <TableHead>Name</TableHead>
              <TableHead>Description</TableHead>
              <TableHead>Email</TableHead>
              <TableHead>Phone</TableHead>
              <TableHead>Status</TableHead>
              <TableHead>Created</TableHead>
              <TableHead className="text-right">Actions</TableHead>
            </TableRow>
          </TableHeader>
          <TableBody>
            {{{camel}}List.length === 0 ? (
              <TableRow>
                <TableCell colSpan={7} className="text-center py-8">
                  No {{camel}} found
                </TableCell>
              </TableRow>
            ) : (
              {{camel}}List.map(({{camel}}) => (
                <TableRow key={{{camel}}.id}>
                  <TableCell className="font-medium">{{{camel}}.name}</TableCell>
                  <TableCell>{{{camel}}.description || '-'}</TableCell>
                  <TableCell>{{{camel}}.email || '-'}</TableCell>
                  <TableCell>{{{camel}}.phone || '-'}</TableCell>
                  <TableCell>
                    <Badge variant={{{camel}}.active ? 'default' : 'secondary'}>
                      {{{camel}}.active ? 'Active' : 'Inactive'}
                    </Badge>
                  </TableCell>
                  <TableCell>
                    {{{camel}}.createdAt?.toLocaleDateString() || '-'}
                  </TableCell>
                  <TableCell className="text-right">
                    <div className="flex justify-end gap-1">
                      <Button
                        size="sm"
                        variant="ghost"
                        onClick={() => onView({{camel}})}
                        className="h-8 w-8 p-0"
                      >
                        <Eye className="h-4 w-4" />
                      </Button>
                      <Button
                        size="sm"
                        variant="ghost"
                        onClick={() => onEdit({{camel}})}
                        className="h-8 w-8 p-0"
                      >
                        <Edit className="h-4 w-4" />
                      </Button>
                      <Button
                        size="sm"
                        variant="ghost"
                        onClick={() => setDeleteId({{camel}}.id!)}
                        className="h-8 w-8 p-0 text-red-600 hover:text-red-700"
                      >
                        <Trash2 className="h-4 w-4" />
                      </Button>
                    </div>
                  </TableCell>
                </TableRow>
              ))
            )}
          </TableBody>
        </Table>
      </div>

      {/* Delete confirmation */}
      <ConfirmationDialog
        open={!!deleteId}
        onOpenChange={(open) => !open && setDeleteId(null)}
        onConfirm={handleDelete}
        isPending={delete{{Pascal}}.isPending}
        variant="delete"
        title="Delete {{Pascal}}"
        description="Are you sure you want to delete this {{camel}}? This action cannot be undone."
      />
    </div>
  )
}
"#;

/// The `_components/<Pascal>Table.tsx` file.
pub struct TableTsx<'a> {
    forms: &'a CanonicalForms,
}

impl<'a> TableTsx<'a> {
    pub fn new(forms: &'a CanonicalForms) -> Self {
        Self { forms }
    }
}

impl GeneratedFile for TableTsx<'_> {
    fn path(&self) -> String {
        format!("{}/{}Table.tsx", COMPONENTS_DIR, self.forms.pascal())
    }

    fn render(&self) -> String {
        render(TEMPLATE, self.forms)
    }
}
