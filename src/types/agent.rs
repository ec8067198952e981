//! Agent configuration listings.

use serde::Deserialize;

/// Id and display name of one configured agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentSummary {
    #[serde(rename = "sId")]
    pub s_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfigurationsResponse {
    #[serde(default)]
    pub agent_configurations: Vec<AgentSummary>,
}
