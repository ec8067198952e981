//! Tests for the error system.

use std::path::PathBuf;

use dust_cli::error::*;

#[test]
fn error_api_creation() {
    let err = DustError::api(404, "Not found");
    assert!(matches!(&err, DustError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "API error (status 404): Not found");
}

#[test]
fn error_categories_are_stable_for_major_variants() {
    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        (DustError::api(401, "x"), ErrorCategory::Authentication),
        (DustError::api(403, "x"), ErrorCategory::Authentication),
        (DustError::api(404, "x"), ErrorCategory::Api),
        (DustError::api(502, "x"), ErrorCategory::Server),
        (DustError::Network(network_error), ErrorCategory::Network),
        (DustError::Io(io_error), ErrorCategory::Filesystem),
        (
            DustError::NotText {
                path: PathBuf::from("a.bin"),
            },
            ErrorCategory::Filesystem,
        ),
        (DustError::Serialization(serde_error), ErrorCategory::MalformedResponse),
        (
            DustError::MalformedResponse("no uploadUrl".to_string()),
            ErrorCategory::MalformedResponse,
        ),
        (DustError::missing("DUST_TOKEN"), ErrorCategory::Configuration),
        (DustError::NoActiveAgent, ErrorCategory::Usage),
    ];

    for (error, expected) in cases {
        assert_eq!(error.category(), expected, "unexpected category for {error}");
    }
}

#[test]
fn response_body_only_for_api_errors_with_content() {
    assert_eq!(DustError::api(500, "oops").response_body(), Some("oops"));
    assert_eq!(DustError::api(500, "").response_body(), None);
    assert_eq!(DustError::NoActiveAgent.response_body(), None);
}

#[test]
fn category_display_is_snake_case() {
    assert_eq!(ErrorCategory::MalformedResponse.to_string(), "malformed_response");
}
