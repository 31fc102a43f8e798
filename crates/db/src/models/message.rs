//! Message entity model (contact form submissions).

use folio_core::forms::ContactForm;
use folio_core::types::{DocumentId, Timestamp};
use serde::Serialize;

use super::ToFields;
use crate::document::{Document, FieldAccess, Fields};

/// A document from the `messages` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
}

impl Message {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            name: f.string("name"),
            email: f.string("email"),
            message: f.string("message"),
            read: f.boolean("read"),
            created_at: f.timestamp_or_now("createdAt"),
        }
    }
}

impl ToFields for ContactForm {
    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.insert("name".into(), self.name.clone().into());
        f.insert("email".into(), self.email.clone().into());
        f.insert("message".into(), self.message.clone().into());
        f
    }
}
