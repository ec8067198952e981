//! Document publishing against a mock Dust server.

mod common;

use std::collections::HashSet;

use dust_cli::error::DustError;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, AUTH};

const DOCUMENTS: &str = "/api/v1/w/ws/spaces/sp/data_sources/ds/documents";

async fn mount_existing(server: &MockServer, ids: &[&str]) {
    let documents: Vec<_> = ids
        .iter()
        .map(|id| json!({"document_id": id, "title": id, "timestamp": 1}))
        .collect();
    Mock::given(method("GET"))
        .and(path(DOCUMENTS))
        .and(header("authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": documents,
            "total": ids.len()
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn existing_ids_are_the_deduplicated_document_ids() {
    let server = MockServer::start().await;
    mount_existing(&server, &["doc1", "doc2", "doc1"]).await;

    let ids = client_for(&server)
        .documents()
        .existing_document_ids()
        .await
        .unwrap();

    let expected: HashSet<String> = ["doc1", "doc2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn publish_sends_title_text_and_source_url() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("memo-17.txt");
    std::fs::write(&file, "Top secret memo").unwrap();

    Mock::given(method("POST"))
        .and(path(format!("{DOCUMENTS}/memo-17")))
        .and(header("authorization", AUTH))
        .and(body_json(json!({
            "title": "memo-17",
            "mime_type": "text/plain",
            "text": "Top secret memo",
            "source_url": "https://example.test/memo-17.pdf"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"document_id": "memo-17"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let title = client_for(&server).documents().publish(&file).await.unwrap();
    assert_eq!(title, "memo-17");
}

#[tokio::test]
async fn publish_all_skips_titles_already_present() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    std::fs::write(&old, "changed content, same name").unwrap();
    std::fs::write(&new, "fresh").unwrap();

    mount_existing(&server, &["old"]).await;

    Mock::given(method("POST"))
        .and(path(format!("{DOCUMENTS}/old")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{DOCUMENTS}/new")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .documents()
        .publish_all(&[old, new])
        .await
        .unwrap();

    assert_eq!(report.published, vec!["new".to_string()]);
    assert_eq!(report.skipped, vec!["old".to_string()]);
    assert!(report.failed.is_empty());
}

#[tokio::test]
async fn publish_all_continues_after_a_failure() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let binary = dir.path().join("blob.txt");
    let bad = dir.path().join("bad.txt");
    let good = dir.path().join("good.txt");
    std::fs::write(&binary, b"\xff\xfe\x00\x81").unwrap();
    std::fs::write(&bad, "rejected").unwrap();
    std::fs::write(&good, "accepted").unwrap();

    mount_existing(&server, &[]).await;

    Mock::given(method("POST"))
        .and(path(format!("{DOCUMENTS}/blob")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{DOCUMENTS}/bad")))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{DOCUMENTS}/good")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .documents()
        .publish_all(&[binary, bad, good])
        .await
        .unwrap();

    assert_eq!(report.published, vec!["good".to_string()]);
    assert_eq!(report.failed.len(), 2);
    assert!(matches!(report.failed[0].1, DustError::NotText { .. }));
    assert!(matches!(report.failed[1].1, DustError::Api { status: 500, .. }));
}

#[tokio::test]
async fn listing_failure_aborts_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .documents()
        .publish_all(&[])
        .await
        .unwrap_err();

    assert!(matches!(err, DustError::Api { status: 401, .. }));
}
