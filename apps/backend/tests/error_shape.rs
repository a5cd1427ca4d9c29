mod common;

use actix_web::test;
use backend::test_support::{create_test_app_builder, test_state};

#[actix_web::test]
async fn test_not_found_problem_document() {
    let state = test_state().await;
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/api/items/12345").to_request();
    let resp = test::call_service(&app, req).await;

    let json = common::assert_problem_details_structure(resp, 404, "ITEM_NOT_FOUND").await;
    assert_eq!(json["title"].as_str(), Some("Item Not Found"));
    assert_eq!(json["detail"].as_str(), Some("Item 12345 not found"));
}

#[actix_web::test]
async fn test_malformed_json_problem_document() {
    let state = test_state().await;
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::post()
        .uri("/api/items")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Widget""#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let json = common::assert_problem_details_structure(resp, 400, "BAD_REQUEST").await;
    assert!(json["detail"]
        .as_str()
        .expect("detail should be a string")
        .contains("Invalid JSON"));
}

#[actix_web::test]
async fn test_trace_id_matches_request_id_header() {
    let state = test_state().await;
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/api/items/0").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be set")
        .to_string();

    let json = common::assert_problem_details_structure(resp, 400, "INVALID_ITEM_ID").await;
    assert_eq!(json["trace_id"].as_str(), Some(request_id.as_str()));
}
