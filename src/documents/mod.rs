//! Publishing local text files as data source documents.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{info, warn};

use crate::client::http::ApiRequest;
use crate::client::DustClient;
use crate::error::{DustError, Result};
use crate::types::{DocumentsResponse, UpsertDocumentRequest, DOCUMENT_MIME_TYPE};

pub const DEFAULT_DOCUMENT_EXTENSION: &str = "txt";

/// Outcome of a bulk publish run.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub published: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(PathBuf, DustError)>,
}

pub struct DocumentPublisher<'a> {
    client: &'a DustClient,
}

impl<'a> DocumentPublisher<'a> {
    pub(crate) fn new(client: &'a DustClient) -> Self {
        Self { client }
    }

    /// Every `document_id` currently stored in the data source.
    pub async fn existing_document_ids(&self) -> Result<HashSet<String>> {
        let url = self.client.data_source_url(&["documents"])?;
        let response: DocumentsResponse = self.client.execute(ApiRequest::get(url)).await?;
        Ok(response
            .documents
            .into_iter()
            .map(|doc| doc.document_id)
            .collect())
    }

    /// Upload one file, using its title as document id. Returns the title.
    pub async fn publish(&self, path: &Path) -> Result<String> {
        let title = document_title(path)?;
        let bytes = tokio::fs::read(path).await?;
        let text = String::from_utf8(bytes).map_err(|_| DustError::NotText {
            path: path.to_path_buf(),
        })?;

        let body = UpsertDocumentRequest {
            title: title.clone(),
            mime_type: DOCUMENT_MIME_TYPE.to_string(),
            text,
            source_url: render_source_url(self.client.config().source_url_template(), &title),
        };
        let url = self.client.data_source_url(&["documents", &title])?;
        let _: serde_json::Value = self
            .client
            .execute(ApiRequest::post_json(url, &body)?)
            .await?;

        info!(%title, "Document published");
        Ok(title)
    }

    /// Publish every path whose title is not already in the data source.
    ///
    /// The existing set is fetched once up front; a failure there aborts the
    /// run, while per-file failures are collected and the run continues.
    pub async fn publish_all(&self, paths: &[PathBuf]) -> Result<PublishReport> {
        let mut existing = self.existing_document_ids().await?;
        let mut report = PublishReport::default();

        for path in paths {
            let title = match document_title(path) {
                Ok(title) => title,
                Err(err) => {
                    report.failed.push((path.clone(), err));
                    continue;
                }
            };
            if existing.contains(&title) {
                report.skipped.push(title);
                continue;
            }

            match self.publish(path).await {
                Ok(title) => {
                    existing.insert(title.clone());
                    report.published.push(title);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Document upload failed");
                    report.failed.push((path.clone(), err));
                }
            }
        }

        Ok(report)
    }
}

/// File base name without its extension.
pub fn document_title(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| DustError::InvalidArgument(format!("{} has no usable file name", path.display())))
}

/// Substitute `{name}` in a source URL template.
pub fn render_source_url(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// Recursively collect files under `root` with the given extension, sorted.
pub fn discover_documents(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DustError::InvalidArgument(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if is_file && matches {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
