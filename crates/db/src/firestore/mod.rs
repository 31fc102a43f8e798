//! Firestore REST v1 implementation of [`DocumentStore`].
//!
//! Every request carries the project API key as `?key=`. When an admin is
//! signed in, their provider id token is forwarded as the bearer credential so
//! the hosted security rules see an authenticated principal.

pub mod value;

use async_trait::async_trait;
use folio_core::types::DocumentId;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::config::FirebaseConfig;
use crate::document::{Direction, Document, Fields, OrderBy};
use crate::error::StoreError;
use crate::store::DocumentStore;

/// HTTP client for one Firestore database.
pub struct FirestoreStore {
    client: reqwest::Client,
    documents_url: String,
    api_key: String,
    id_token: RwLock<Option<String>>,
}

impl FirestoreStore {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a store reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &FirebaseConfig) -> Self {
        Self {
            client,
            documents_url: config.documents_url(),
            api_key: config.api_key.clone(),
            id_token: RwLock::new(None),
        }
    }

    /// Replace the bearer credential used for subsequent requests. `None`
    /// sends requests unauthenticated.
    pub async fn set_id_token(&self, token: Option<String>) {
        *self.id_token.write().await = token;
    }

    // ---- private helpers ----

    async fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .query(&[("key", self.api_key.as_str())]);
        match self.id_token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Address of one document. `collection` and `id` are appended as
    /// percent-encoded path segments.
    fn document_url(&self, collection: &str, id: &str) -> Result<String, StoreError> {
        let mut url = url::Url::parse(&self.documents_url)
            .map_err(|e| StoreError::InvalidUrl(format!("{}: {e}", self.documents_url)))?;
        url.path_segments_mut()
            .map_err(|()| StoreError::InvalidUrl(self.documents_url.clone()))?
            .push(collection)
            .push(id);
        Ok(url.into())
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`StoreError::Api`] carrying the status and
    /// body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Map a 404 on a single-document call to [`StoreError::NotFound`].
    fn not_found_as(err: StoreError, collection: &str, id: &str) -> StoreError {
        match err {
            StoreError::Api { status: 404, .. } => StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            },
            other => other,
        }
    }
}

/// Build the `structuredQuery` body for a whole-collection read.
fn structured_query(collection: &str, order_by: Option<&OrderBy>) -> Value {
    let mut query = json!({ "from": [{ "collectionId": collection }] });
    if let Some(order) = order_by {
        let direction = match order.direction {
            Direction::Ascending => "ASCENDING",
            Direction::Descending => "DESCENDING",
        };
        query["orderBy"] = json!([{
            "field": { "fieldPath": field_path(&order.field) },
            "direction": direction,
        }]);
    }
    json!({ "structuredQuery": query })
}

/// Quote a field name for use in a field path. Simple identifiers pass
/// through; anything else is wrapped in backticks.
fn field_path(name: &str) -> String {
    let mut chars = name.chars();
    let simple = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if simple {
        name.to_string()
    } else {
        format!("`{}`", name.replace('\\', "\\\\").replace('`', "\\`"))
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn query_collection(
        &self,
        collection: &str,
        order_by: Option<&OrderBy>,
    ) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}:runQuery", self.documents_url);
        let response = self
            .request(reqwest::Method::POST, url)
            .await
            .json(&structured_query(collection, order_by))
            .send()
            .await?;

        // The stream holds one entry per result plus entries with only a
        // `readTime` (e.g. for an empty collection).
        let entries: Vec<Value> = Self::parse_response(response).await?;
        entries
            .iter()
            .filter_map(|entry| entry.get("document"))
            .map(value::decode_document)
            .collect()
    }

    async fn add_document(
        &self,
        collection: &str,
        fields: Fields,
    ) -> Result<DocumentId, StoreError> {
        let url = format!("{}/{collection}", self.documents_url);
        let response = self
            .request(reqwest::Method::POST, url)
            .await
            .json(&json!({ "fields": value::encode_fields(&fields) }))
            .send()
            .await?;

        let created: Value = Self::parse_response(response).await?;
        let doc = value::decode_document(&created)?;
        tracing::debug!(collection, id = %doc.id, "Document created");
        Ok(doc.id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let mut params: Vec<(&str, String)> = fields
            .keys()
            .map(|k| ("updateMask.fieldPaths", field_path(k)))
            .collect();
        params.push(("currentDocument.exists", "true".to_string()));

        let response = self
            .request(reqwest::Method::PATCH, self.document_url(collection, id)?)
            .await
            .query(&params)
            .json(&json!({ "fields": value::encode_fields(&fields) }))
            .send()
            .await?;

        Self::ensure_success(response)
            .await
            .map_err(|e| Self::not_found_as(e, collection, id))?;
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::DELETE, self.document_url(collection, id)?)
            .await
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_path_quotes_non_identifiers() {
        assert_eq!(field_path("createdAt"), "createdAt");
        assert_eq!(field_path("_private1"), "_private1");
        assert_eq!(field_path("1st"), "`1st`");
        assert_eq!(field_path("social links"), "`social links`");
        assert_eq!(field_path("a`b"), "`a\\`b`");
    }

    #[test]
    fn ordered_query_body() {
        let body = structured_query("projects", Some(&OrderBy::desc("createdAt")));
        assert_eq!(
            body,
            json!({ "structuredQuery": {
                "from": [{ "collectionId": "projects" }],
                "orderBy": [{
                    "field": { "fieldPath": "createdAt" },
                    "direction": "DESCENDING"
                }]
            } })
        );
    }

    #[test]
    fn unordered_query_has_no_order_clause() {
        let body = structured_query("profile", None);
        assert!(body["structuredQuery"].get("orderBy").is_none());
    }

    #[test]
    fn document_ids_are_percent_encoded() {
        let store = FirestoreStore::new(&FirebaseConfig {
            api_key: "key".into(),
            project_id: "demo".into(),
            auth_domain: "demo.firebaseapp.com".into(),
        });

        let url = store.document_url("projects", "p1").unwrap();
        assert_eq!(
            url,
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/projects/p1"
        );

        let url = store.document_url("projects", "a/b?c#d").unwrap();
        assert!(url.ends_with("/documents/projects/a%2Fb%3Fc%23d"), "{url}");
    }

    #[test]
    fn api_404_maps_to_not_found() {
        let err = FirestoreStore::not_found_as(
            StoreError::Api {
                status: 404,
                body: String::new(),
            },
            "skills",
            "x1",
        );
        assert!(matches!(err, StoreError::NotFound { ref id, .. } if id == "x1"));
    }
}
