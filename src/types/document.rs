//! Data source document bodies.

use serde::{Deserialize, Serialize};

pub const DOCUMENT_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentEntry {
    pub document_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// Body of `POST .../documents/{documentId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertDocumentRequest {
    pub title: String,
    pub mime_type: String,
    pub text: String,
    pub source_url: String,
}
