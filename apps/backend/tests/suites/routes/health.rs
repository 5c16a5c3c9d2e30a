use actix_web::http::StatusCode;
use actix_web::test;
use scorebook::config::store::LogLayout;
use scorebook::AppError;
use serde_json::Value;

use crate::support::{build_test_state, create_test_app, faulty_state, Fault};

#[actix_web::test]
async fn health_reports_store_and_layout() -> Result<(), AppError> {
    let state = build_test_state(LogLayout::PerGame).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "ok");
    assert_eq!(body["play_log"], "per_game");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("store_error").is_none());
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));
    Ok(())
}

#[actix_web::test]
async fn health_stays_up_when_store_fails() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    faulty.fail_reads(Fault::Unavailable);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["store"], "error");
    assert!(body["store_error"]
        .as_str()
        .is_some_and(|e| e.contains("unavailable")));
    Ok(())
}
