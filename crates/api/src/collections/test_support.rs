//! Fixtures shared by the collection tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use folio_core::forms::{ContactForm, ProjectForm, SkillForm};
use folio_core::types::DocumentId;
use folio_db::memory::MemoryStore;
use folio_db::{Document, DocumentStore, Fields, OrderBy, StoreError};

/// A store whose every call fails as if the service were down.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Api {
        status: 503,
        body: "unavailable".into(),
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn query_collection(
        &self,
        _collection: &str,
        _order_by: Option<&OrderBy>,
    ) -> Result<Vec<Document>, StoreError> {
        Err(unavailable())
    }

    async fn add_document(&self, _: &str, _: Fields) -> Result<DocumentId, StoreError> {
        Err(unavailable())
    }

    async fn update_document(&self, _: &str, _: &str, _: Fields) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn delete_document(&self, _: &str, _: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

/// An in-memory store whose reads can be switched off while writes keep
/// succeeding.
pub struct FlakyReadStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
}

impl FlakyReadStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for FlakyReadStore {
    async fn query_collection(
        &self,
        collection: &str,
        order_by: Option<&OrderBy>,
    ) -> Result<Vec<Document>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.inner.query_collection(collection, order_by).await
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: Fields,
    ) -> Result<DocumentId, StoreError> {
        self.inner.add_document(collection, fields).await
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        self.inner.update_document(collection, id, fields).await
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.inner.delete_document(collection, id).await
    }
}

pub fn project_form(title: &str) -> ProjectForm {
    ProjectForm {
        title: title.into(),
        description: "Forecasts with an offline cache".into(),
        tech_stack: vec!["Flutter".into(), "Dart".into()],
        image_url: "https://img.example.com/weather.png".into(),
        github_url: "https://github.com/me/weather".into(),
        demo_url: String::new(),
        featured: false,
    }
}

pub fn skill_form(name: &str, category: &str, proficiency: i64) -> SkillForm {
    SkillForm {
        name: name.into(),
        category: category.into(),
        icon: "code".into(),
        proficiency,
        featured: false,
    }
}

pub fn contact_form(name: &str) -> ContactForm {
    ContactForm {
        name: name.into(),
        email: "visitor@example.com".into(),
        message: "I would like to talk about a project.".into(),
    }
}
