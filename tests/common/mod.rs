//! Shared test helpers.

#![allow(dead_code)]

use std::sync::Arc;

use dust_cli::client::DustClient;
use dust_cli::config::DustConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const AUTH: &str = "Bearer test-token";

/// Client for workspace `ws`, space `sp`, data source `ds`, pointed at the mock server.
pub fn client_for(server: &MockServer) -> Arc<DustClient> {
    let config = DustConfig::new(TOKEN, "ws")
        .with_data_source("sp", "ds")
        .with_base_url(server.uri())
        .with_source_url_template("https://example.test/{name}.pdf");
    Arc::new(DustClient::new(config).expect("client"))
}

pub fn creation_body(conversation_id: &str, reply: Option<&str>) -> Value {
    let mut groups = vec![json!([{"type": "user_message", "sId": "m0", "content": "question"}])];
    if let Some(reply) = reply {
        groups.push(json!([{"type": "agent_message", "sId": "m1", "content": reply}]));
    }
    json!({
        "conversation": {
            "sId": conversation_id,
            "title": null,
            "content": groups
        }
    })
}

pub fn continuation_body(reply: &str) -> Value {
    json!({
        "message": {"type": "user_message", "sId": "m2", "content": "more"},
        "agentMessages": [{"type": "agent_message", "sId": "m3", "content": reply}]
    })
}
