//! Typed entity models and the document field mappings for each.
//!
//! Reads go through [`FieldAccess`](crate::document::FieldAccess) and are
//! lenient. Writes go through [`ToFields`], producing exactly the camelCase
//! field set the hosted database stores.

pub mod message;
pub mod profile;
pub mod project;
pub mod skill;

use crate::document::{FieldValue, Fields};

/// Conversion into a document field map for create or patch payloads.
pub trait ToFields {
    fn to_fields(&self) -> Fields;
}

/// Insert `value` under `key` when it is `Some`. Used by patch DTOs so absent
/// fields are left untouched in the stored document.
pub(crate) fn put_opt<T>(fields: &mut Fields, key: &str, value: &Option<T>)
where
    T: Clone + Into<FieldValue>,
{
    if let Some(v) = value {
        fields.insert(key.to_string(), v.clone().into());
    }
}
