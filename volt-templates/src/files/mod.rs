//! Template producers.
//!
//! Module-scoped producers borrow the [`CanonicalForms`](volt_core::CanonicalForms)
//! of the module being scaffolded; infrastructure producers are unit structs.

mod form_tsx;
mod layout_tsx;
mod mutations_ts;
mod page_tsx;
mod queries_ts;
mod schema_ts;
mod storage_keys_ts;
mod table_tsx;
mod use_form_tsx;
mod use_page_tsx;
mod use_user_preferences_ts;
mod user_preferences_ts;

pub use form_tsx::FormTsx;
pub use layout_tsx::LayoutTsx;
pub use mutations_ts::MutationsTs;
pub use page_tsx::PageTsx;
pub use queries_ts::QueriesTs;
pub use schema_ts::SchemaTs;
pub use storage_keys_ts::StorageKeysTs;
pub use table_tsx::TableTsx;
pub use use_form_tsx::UseFormTsx;
pub use use_page_tsx::UsePageTsx;
pub use use_user_preferences_ts::UseUserPreferencesTs;
pub use user_preferences_ts::UserPreferencesTs;

/// Directory holding the zod schema
pub const SCHEMAS_DIR: &str = "_schemas";
/// Directory holding query hooks
pub const QUERIES_DIR: &str = "_api/queries";
/// Directory holding mutation hooks
pub const MUTATIONS_DIR: &str = "_api/mutations";
/// Directory holding UI components
pub const COMPONENTS_DIR: &str = "_components";
