//! Authenticated client for one Dust workspace.

pub mod http;
pub(crate) mod multipart;

use std::path::Path;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::agents::AgentDirectory;
use crate::config::DustConfig;
use crate::documents::DocumentPublisher;
use crate::error::{DustError, Result};
use crate::files::FileUploader;
use crate::session::ConversationApi;
use crate::types::{
    ContinuationResponse, CreateConversationRequest, CreationResponse, MessageRequest,
};

use self::http::{bearer_headers, build_client, read_json, ApiRequest};

/// Entry point for every remote operation.
#[derive(Debug, Clone)]
pub struct DustClient {
    config: DustConfig,
    http: reqwest::Client,
}

impl DustClient {
    pub fn new(config: DustConfig) -> Result<Self> {
        let http = build_client(config.timeout())?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &DustConfig {
        &self.config
    }

    pub fn agents(&self) -> AgentDirectory<'_> {
        AgentDirectory::new(self)
    }

    pub fn documents(&self) -> DocumentPublisher<'_> {
        DocumentPublisher::new(self)
    }

    pub fn files(&self) -> FileUploader<'_> {
        FileUploader::new(self)
    }

    /// `{base}/api/v1/w/{workspace}/{segments...}`
    pub(crate) fn workspace_url(&self, segments: &[&str]) -> Result<Url> {
        let mut path = vec!["api", "v1", "w", self.config.workspace_id()];
        path.extend_from_slice(segments);
        self.endpoint(&path)
    }

    /// `{base}/api/v1/w/{workspace}/spaces/{space}/data_sources/{ds}/{segments...}`
    pub(crate) fn data_source_url(&self, segments: &[&str]) -> Result<Url> {
        let space_id = self.config.require_space_id()?;
        let data_source_id = self.config.require_data_source_id()?;
        let mut path = vec!["spaces", space_id, "data_sources", data_source_id];
        path.extend_from_slice(segments);
        self.workspace_url(&path)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = self.config.base_url();
        let mut url = Url::parse(base)
            .map_err(|e| DustError::Configuration(format!("Invalid base URL '{base}': {e}")))?;
        url.path_segments_mut()
            .map_err(|_| DustError::Configuration(format!("Base URL '{base}' cannot take a path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request with the bearer token and decode the JSON answer.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        debug!(method = %request.method, url = %request.url, "Dust request");

        let mut headers = bearer_headers(self.config.token());
        headers.extend(request.headers);

        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl ConversationApi for DustClient {
    async fn create_conversation(
        &self,
        request: &CreateConversationRequest,
    ) -> Result<CreationResponse> {
        let url = self.workspace_url(&["assistant", "conversations"])?;
        self.execute(ApiRequest::post_json(url, request)?).await
    }

    async fn continue_conversation(
        &self,
        conversation_id: &str,
        request: &MessageRequest,
    ) -> Result<ContinuationResponse> {
        let url =
            self.workspace_url(&["assistant", "conversations", conversation_id, "messages"])?;
        self.execute(ApiRequest::post_json(url, request)?).await
    }

    async fn upload_attachment(&self, path: &Path) -> Result<String> {
        self.files().upload(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> DustClient {
        DustClient::new(DustConfig::new("sk", "ws1").with_base_url(base_url)).unwrap()
    }

    #[test]
    fn workspace_url_joins_segments() {
        let url = client("https://dust.tt")
            .workspace_url(&["assistant", "agent_configurations"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dust.tt/api/v1/w/ws1/assistant/agent_configurations"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let url = client("http://localhost:3000/").workspace_url(&["files"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/v1/w/ws1/files");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let url = client("https://dust.tt")
            .workspace_url(&["assistant", "agent_configurations", "my agent"])
            .unwrap();
        assert!(url.as_str().ends_with("/agent_configurations/my%20agent"));
    }

    #[test]
    fn data_source_url_requires_space_and_data_source() {
        let err = client("https://dust.tt").data_source_url(&["documents"]).unwrap_err();
        assert!(matches!(err, DustError::MissingConfiguration { .. }));
    }

    #[test]
    fn data_source_url_includes_space_and_data_source() {
        let config = DustConfig::new("sk", "ws1").with_data_source("sp", "ds");
        let url = DustClient::new(config)
            .unwrap()
            .data_source_url(&["documents"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dust.tt/api/v1/w/ws1/spaces/sp/data_sources/ds/documents"
        );
    }

    #[test]
    fn invalid_base_url_is_a_configuration_error() {
        let err = client("not a url").workspace_url(&["files"]).unwrap_err();
        assert!(matches!(err, DustError::Configuration(_)));
    }
}
