#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend::test_support::logging::init();
}

// Each test binary gets its own in-memory database, so committing on success
// is the default; flip per-binary via `STOCKROOM_TXN_POLICY=rollback`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("STOCKROOM_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "rollback" => backend::db::txn_policy::TxnPolicy::RollbackOnOk,
        _ => backend::db::txn_policy::TxnPolicy::CommitOnOk,
    };

    backend::db::txn_policy::set_txn_policy(policy);
}

/// Helper function to validate that a response follows the ProblemDetails structure
/// and that trace_id matches the x-trace-id header
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> Value {
    // Assert status code
    assert_eq!(resp.status().as_u16(), expected_status);

    // Extract headers before consuming the response
    let headers = resp.headers().clone();

    let content_type = headers
        .get(HeaderName::from_static("content-type"))
        .and_then(|v| v.to_str().ok())
        .expect("problem response should have a content-type");
    assert_eq!(content_type, "application/problem+json");

    // Header names are case-insensitive; use a typed HeaderName
    let trace_hdr = HeaderName::from_static("x-trace-id");
    let header_trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("problem response should carry x-trace-id")
        .to_string();

    let json: Value = test::read_body_json(resp).await;

    assert_eq!(json["status"].as_u64(), Some(u64::from(expected_status)));
    assert_eq!(json["code"].as_str(), Some(expected_code));
    assert!(
        json["type"]
            .as_str()
            .expect("type field should be a string")
            .ends_with(expected_code),
        "type URI should end with the error code"
    );
    assert!(
        !json["detail"]
            .as_str()
            .expect("detail field should be a string")
            .is_empty(),
        "detail should not be empty"
    );

    let trace_id_in_body = json["trace_id"]
        .as_str()
        .expect("trace_id field should be a string");
    assert_eq!(
        trace_id_in_body, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );

    json
}
