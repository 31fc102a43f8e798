/// Errors from the document store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The hosted database returned a non-2xx status code.
    #[error("Document store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The target document does not exist.
    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    /// A document address could not be built from the configured base URL.
    #[error("Invalid document URL: {0}")]
    InvalidUrl(String),

    /// A stored document or wire payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}
