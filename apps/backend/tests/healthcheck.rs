mod common;

use actix_web::test;
use backend::test_support::{create_test_app_builder, test_state};

#[actix_web::test]
async fn test_health_endpoint() {
    let state = test_state().await;
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn test_welcome_banner() {
    let state = test_state().await;
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Welcome to the Stockroom API");
}

#[actix_web::test]
async fn test_request_id_header_present() {
    let state = test_state().await;
    let app = create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("build test app");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be set");
    assert!(!request_id.is_empty());
}
