//! Agent configuration lookups. Every call goes to the network; nothing is cached.

use crate::client::http::ApiRequest;
use crate::client::DustClient;
use crate::error::Result;
use crate::types::{AgentConfigurationsResponse, AgentSummary};

pub struct AgentDirectory<'a> {
    client: &'a DustClient,
}

impl<'a> AgentDirectory<'a> {
    pub(crate) fn new(client: &'a DustClient) -> Self {
        Self { client }
    }

    pub async fn list_agents(&self) -> Result<Vec<AgentSummary>> {
        let url = self
            .client
            .workspace_url(&["assistant", "agent_configurations"])?;
        let response: AgentConfigurationsResponse =
            self.client.execute(ApiRequest::get(url)).await?;
        Ok(response.agent_configurations)
    }

    /// Full configuration of one agent, unwrapped from `agentConfiguration` when present.
    pub async fn get_agent(&self, agent_id: &str) -> Result<serde_json::Value> {
        let url = self
            .client
            .workspace_url(&["assistant", "agent_configurations", agent_id])?;
        let mut response: serde_json::Value = self.client.execute(ApiRequest::get(url)).await?;
        Ok(match response.get_mut("agentConfiguration") {
            Some(config) => config.take(),
            None => response,
        })
    }
}
