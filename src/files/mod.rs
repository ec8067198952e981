//! Two-phase file upload used for conversation attachments.
//!
//! The workspace first hands out an upload slot (`POST /files`), then the
//! file bytes are pushed as multipart to the returned URL. Only after both
//! calls succeed does a usable file id exist.

use std::path::Path;

use reqwest::Url;
use tracing::debug;
use uuid::Uuid;

use crate::client::http::ApiRequest;
use crate::client::multipart::build_file_multipart;
use crate::client::DustClient;
use crate::error::{DustError, Result};
use crate::types::{FileUploadRequest, FileUploadResponse, CONVERSATION_USE_CASE};

/// Signed destination for one pending upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSlot {
    pub file_id: String,
    pub upload_url: String,
}

pub struct FileUploader<'a> {
    client: &'a DustClient,
}

impl<'a> FileUploader<'a> {
    pub(crate) fn new(client: &'a DustClient) -> Self {
        Self { client }
    }

    /// Ask the workspace for an upload URL for `path`.
    pub async fn request_upload_slot(&self, path: &Path, content_type: &str) -> Result<UploadSlot> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(DustError::InvalidArgument(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let body = FileUploadRequest {
            content_type: content_type.to_string(),
            file_name: file_name(path)?,
            file_size: metadata.len(),
            use_case: CONVERSATION_USE_CASE.to_string(),
        };
        let url = self.client.workspace_url(&["files"])?;
        let response: FileUploadResponse = self
            .client
            .execute(ApiRequest::post_json(url, &body)?)
            .await?;

        let upload_url = response.file.upload_url.ok_or_else(|| {
            DustError::MalformedResponse("upload slot response has no uploadUrl".to_string())
        })?;
        debug!(file_id = %response.file.s_id, "Upload slot granted");

        Ok(UploadSlot {
            file_id: response.file.s_id,
            upload_url,
        })
    }

    /// Push the file body to a slot URL and return the stored file id.
    pub async fn push_bytes(&self, path: &Path, upload_url: &str, content_type: &str) -> Result<String> {
        let url = Url::parse(upload_url)
            .map_err(|e| DustError::MalformedResponse(format!("Invalid upload URL: {e}")))?;
        let bytes = tokio::fs::read(path).await?;

        let boundary = format!("dust-{}", Uuid::new_v4().simple());
        let body = build_file_multipart(&boundary, &file_name(path)?, content_type, &bytes);

        let response: FileUploadResponse = self
            .client
            .execute(ApiRequest::post_multipart(url, &boundary, body)?)
            .await?;
        debug!(file_id = %response.file.s_id, bytes = bytes.len(), "File uploaded");

        Ok(response.file.s_id)
    }

    /// Both phases in sequence.
    pub async fn upload(&self, path: &Path) -> Result<String> {
        let content_type = guess_content_type(path);
        let slot = self.request_upload_slot(path, &content_type).await?;
        self.push_bytes(path, &slot.upload_url, &content_type).await
    }
}

pub(crate) fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| DustError::InvalidArgument(format!("{} has no file name", path.display())))
}

/// Content type from the file extension, `application/octet-stream` when unknown.
pub fn guess_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
