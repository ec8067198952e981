//! File upload bodies.

use serde::{Deserialize, Serialize};

pub const CONVERSATION_USE_CASE: &str = "conversation";

/// Body of `POST /files`, asking for an upload slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadRequest {
    pub content_type: String,
    pub file_name: String,
    pub file_size: u64,
    pub use_case: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    #[serde(rename = "sId")]
    pub s_id: String,
    #[serde(default)]
    pub upload_url: Option<String>,
}

/// Returned both when requesting a slot and after pushing the bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadResponse {
    pub file: UploadedFile,
}
