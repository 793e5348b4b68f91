//! Shared form hook generator.

use volt_core::GeneratedFile;

const CONTENT: &str = r#"import { ReactNode, useState } from "react";
import { useForm, FieldValues, Path } from "react-hook-form";
import { zodResolver } from "@hookform/resolvers/zod";
import { z } from "zod";
import { Button } from "@/components/ui/button";
import {
  Form,
  FormControl,
  FormField,
  FormItem,
  FormLabel,
  FormMessage,
} from "@/components/ui/form";
import { Input } from "@/components/ui/input";
import { Textarea } from "@/components/ui/textarea";
import {
  Select,
  SelectContent,
  SelectItem,
  SelectTrigger,
  SelectValue,
} from "@/components/ui/select";
import { Checkbox } from "@/components/ui/checkbox";
import { Switch } from "@/components/ui/switch";
import { FormDescription } from "@/components/ui/form";
import {
  Card,
  CardContent,
  CardDescription,
  CardHeader,
  CardTitle,
} from "@/components/ui/card";
import {
  Dialog,
  DialogContent,
  DialogDescription,
  DialogTitle,
} from "@/components/ui/dialog";
import { ConfirmationDialog } from "@/components/custom/ConfirmationDialog";
import { Loader2 } from "lucide-react";
import { cn } from "@/utils/cn";

export type FormAction = "create" | "read" | "update";

export interface FormFieldConfig<T extends FieldValues> {
  name: Path<T>;
  label: string;
  icon?: ReactNode;
  type:
    | "text"
    | "number"
    | "textarea"
    | "select"
    | "multiselect"
    | "checkbox"
    | "switch";
  placeholder?: string;
  options?: { value: string; label: string }[];
  rows?: number;
  className?: string;
  disabled?: boolean;
  transform?: (value: any) => any;
  validation?: (value: any) => boolean;
  description?: string;
}

export interface FormConfig<T extends FieldValues> {
  title: {
    create: string;
    read: string;
    update: string;
  };
  description: {
    create: string;
    read: string;
    update: string;
  };
  schema: z.ZodSchema<T>;
  fields: FormFieldConfig<T>[];
  gridCols?: number;
  onSubmit: (data: T, action: FormAction) => Promise<void>;
  isPending?: boolean;
}

export interface FormProps<T extends FieldValues> {
  action: FormAction;
  selectedItem?: Partial<T>;
  closeForm: () => void;
  config: FormConfig<T>;
  // Modal props
  open?: boolean;
  onOpenChange?: (open: boolean) => void;
  asModal?: boolean;
}

export function useFormHook<T extends FieldValues>(props: FormProps<T>) {
  const {
    action,
    selectedItem,
    closeForm,
    config,
    open,
    onOpenChange,
    asModal = true,
  } = props;
  const {
    title,
    description,
    schema,
    fields,
    gridCols = 2,
    onSubmit,
    isPending = false,
  } = config;

  const isReadonly = action === "read";
  const [isConfirmOpen, setIsConfirmOpen] = useState(false);

  const form = useForm<T>({
    resolver: zodResolver(schema),
    defaultValues: selectedItem as any,
  });

  const handleSubmit = async () => {
    await form.handleSubmit(async (data) => {
      try {
        await onSubmit(data, action);
        form.reset();
        closeForm();
      } catch (error) {
        console.error("Error saving:", error);
        if (error instanceof Error) {
          form.setError("root", {
            type: "submit",
            message: `Failed to save: ${error.message}`,
          });
        }
      }
    })();
  };

  const handleConfirmClick = async () => {
    const isValid = await form.trigger();
    if (isValid) {
      setIsConfirmOpen(true);
    }
  };

  const renderField = (field: FormFieldConfig<T>) => {
    const isFieldDisabled = isReadonly || field.disabled;

    // Special handling for switch fields
    if (field.type === "switch") {
      return (
        <FormField
          key={field.name}
          control={form.control}
          name={field.name}
          render={({ field: formField }) => (
            <FormItem className={field.className}>
              <FormControl>
                <div className="flex flex-row items-center justify-between rounded-lg border p-3 shadow-sm">
                  <div className="space-y-0.5">
                    <FormLabel className="flex items-center gap-2">
                      {field.icon}
                      {field.label}
                    </FormLabel>
                    {field.description && (
                      <FormDescription className="text-xs">
                        {field.description}
                      </FormDescription>
                    )}
                  </div>
                  <Switch
                    checked={formField.value || false}
                    onCheckedChange={formField.onChange}
                    disabled={isFieldDisabled}
                  />
                </div>
              </FormControl>
            </FormItem>
          )}
        />
      );
    }

    return (
      <FormField
        key={field.name}
        control={form.control}
        name={field.name}
        render={({ field: formField }) => (
          <FormItem className={field.className}>
            <FormLabel className={field.icon ? "flex items-center gap-2" : ""}>
              {field.icon}
              {field.label}
            </FormLabel>
            <FormControl>
              {(() => {
                switch (field.type) {
                  case "text":
                    return (
                      <Input
                        placeholder={field.placeholder}
                        value={formField.value || ""}
                        disabled={isFieldDisabled}
                        onChange={(e) => {
                          const value = field.transform
                            ? field.transform(e.target.value)
                            : e.target.value;
                          formField.onChange(value);
                        }}
                      />
                    );
                  case "number":
                    return (
                      <Input
                        placeholder={field.placeholder}
                        type="text"
                        inputMode="numeric"
                        pattern="[0-9]*"
                        autoComplete="off"
                        value={
                          formField.value === 0
                            ? ""
                            : formField.value?.toString() ?? ""
                        }
                        onChange={(e) => {
                          const value = e.target.value;
                          if (value === "" || /^\d+$/.test(value)) {
                            const transformedValue = field.transform
                              ? field.transform(value)
                              : value === ""
                              ? 0
                              : parseInt(value, 10);
                            formField.onChange(transformedValue);
                          }
                        }}
                        disabled={isFieldDisabled}
                      />
                    );
                  case "textarea":
                    return (
                      <Textarea
                        placeholder={field.placeholder}
                        {...formField}
                        disabled={isFieldDisabled}
                        rows={field.rows || 3}
                        value={formField.value || ""}
                      />
                    );
                  case "select":
                    return (
                      <Select
                        onValueChange={formField.onChange}
                        value={formField.value?.toString()}
                        disabled={isFieldDisabled}
                      >
                        <SelectTrigger>
                          <SelectValue placeholder={field.placeholder} />
                        </SelectTrigger>
                        <SelectContent>
                          {field.options?.map((option) => (
                            <SelectItem key={option.value} value={option.value}>
                              {option.label}
                            </SelectItem>
                          ))}
                        </SelectContent>
                      </Select>
                    );
                  case "multiselect":
                    const selectedValues: (string | number)[] = Array.isArray(
                      formField.value
                    )
                      ? (formField.value as (string | number)[])
                      : [];
                    return (
                      <div className="space-y-2">
                        <div className="text-sm text-muted-foreground">
                          {selectedValues.length > 0
                            ? `${selectedValues.length} selected`
                            : field.placeholder || "Select items"}
                        </div>
                        <div className="max-h-32 overflow-y-auto border rounded-md p-2 space-y-1">
                          {field.options?.map((option) => {
                            const isSelected = selectedValues.includes(
                              option.value
                            );
                            return (
                              <div
                                key={option.value}
                                className="flex items-center space-x-2"
                              >
                                <Checkbox
                                  disabled={isFieldDisabled}
                                  checked={isSelected}
                                  onCheckedChange={(checked) => {
                                    const newValues = checked
                                      ? [...selectedValues, option.value]
                                      : selectedValues.filter(
                                          (v) => v !== option.value
                                        );
                                    formField.onChange(newValues);
                                  }}
                                />
                                <label
                                  className="text-sm cursor-pointer"
                                  onClick={() => {
                                    if (!isFieldDisabled) {
                                      const isSelected =
                                        selectedValues.includes(option.value);
                                      const newValues = isSelected
                                        ? selectedValues.filter(
                                            (v) => v !== option.value
                                          )
                                        : [...selectedValues, option.value];
                                      formField.onChange(newValues);
                                    }
                                  }}
                                >
                                  {option.label}
                                </label>
                              </div>
                            );
                          })}
                        </div>
                      </div>
                    );
                  case "checkbox":
                    return (
                      <div className="flex items-center space-x-2">
                        <span className="text-xs">{field.description}</span>
                        <Checkbox
                          disabled={isFieldDisabled}
                          checked={formField.value || false}
                          onCheckedChange={(checked: boolean) => {
                            formField.onChange(checked);
                          }}
                        />
                      </div>
                    );
                  default:
                    return null;
                }
              })()}
            </FormControl>
            <FormMessage />
          </FormItem>
        )}
      />
    );
  };

  const formContent = (
    <Card
      className={cn("w-full", {
        "max-w-[500px]": gridCols === 1,
        "max-w-[700px]": gridCols === 2,
        "max-w-[900px]": gridCols === 3,
        "max-w-[1100px]": gridCols === 4,
      })}
    >
      <CardHeader>
        <CardTitle>{title[action]}</CardTitle>
        <CardDescription>{description[action]}</CardDescription>
      </CardHeader>
      <CardContent>
        <Form {...form}>
          <form onSubmit={form.handleSubmit(() => {})} className="space-y-6">
            <div
              className={`grid gap-6 ${
                gridCols > 1 ? `grid-cols-${gridCols}` : ""
              }`}
            >
              {fields.map(renderField)}
            </div>

            <div className="flex justify-end space-x-2 pt-4 border-t">
              <Button
                type="button"
                variant="outline"
                onClick={closeForm}
                disabled={isPending}
                className="w-28"
              >
                {isReadonly ? "Back" : "Cancel"}
              </Button>
              {!isReadonly && (
                <ConfirmationDialog
                  open={isConfirmOpen}
                  onOpenChange={setIsConfirmOpen}
                  onConfirm={handleSubmit}
                  isPending={isPending}
                  variant={action}
                  trigger={
                    <Button
                      type="button"
                      className="w-28"
                      onClick={handleConfirmClick}
                      disabled={isPending}
                    >
                      {isPending && (
                        <Loader2 className="mr-1 h-3 w-3 animate-spin" />
                      )}
                      {isPending
                        ? "Saving"
                        : action === "create"
                        ? "Create"
                        : "Save"}
                    </Button>
                  }
                />
              )}
            </div>
          </form>
        </Form>
      </CardContent>
    </Card>
  );

  const formComponent =
    asModal && open !== undefined && onOpenChange ? (
      <Dialog open={open} onOpenChange={onOpenChange}>
        <DialogTitle />
        <DialogDescription className="sr-only">
          {description[action]}
        </DialogDescription>
        <DialogContent
          className={cn(
            "p-0",
            "gap-0",
            "max-h-[90vh] border-0",
            gridCols === 1
              ? "w-[500px] max-w-[500px]"
              : gridCols === 2
              ? "w-[700px] max-w-[700px]"
              : gridCols === 3
              ? "w-[900px] max-w-[900px]"
              : gridCols === 4
              ? "w-[1100px] max-w-[1100px]"
              : "w-[700px] max-w-[700px]"
          )}
        >
          {formContent}
        </DialogContent>
      </Dialog>
    ) : (
      formContent
    );

  return {
    form,
    formComponent,
    handleSubmit,
    isConfirmOpen,
    setIsConfirmOpen,
  };
}
"#;

/// The `hooks/use-form.tsx` file.
///
/// Renders zod-validated create/read/update forms, optionally inside a modal.
pub struct UseFormTsx;

impl GeneratedFile for UseFormTsx {
    fn path(&self) -> String {
        "hooks/use-form.tsx".to_string()
    }

    fn render(&self) -> String {
        CONTENT.to_string()
    }
}
