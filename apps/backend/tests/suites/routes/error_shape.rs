use actix_web::http::StatusCode;
use actix_web::test;
use scorebook::config::store::LogLayout;
use scorebook::AppError;

use crate::common::assert_problem;
use crate::support::{create_test_app, faulty_state, Fault};

#[actix_web::test]
async fn unavailable_store_is_503_with_retry_after() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    faulty.fail_reads(Fault::Unavailable);

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "STORE_UNAVAILABLE",
        None,
    )
    .await;
    assert_eq!(problem.title, "Store Unavailable");
    Ok(())
}

#[actix_web::test]
async fn timed_out_store_is_504() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    faulty.fail_reads(Fault::Timeout);

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::GATEWAY_TIMEOUT, "STORE_TIMEOUT", Some("timed out")).await;
    Ok(())
}

#[actix_web::test]
async fn failed_write_surfaces_for_game_creation() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    faulty.fail_writes(Fault::Unavailable);

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(serde_json::json!({"name": "Finals"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE", None).await;
    Ok(())
}

#[actix_web::test]
async fn each_error_gets_its_own_trace_id() -> Result<(), AppError> {
    let (state, faulty) = faulty_state(LogLayout::Shared).await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    faulty.fail_reads(Fault::Unavailable);

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/api/players").to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem(resp, StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE", None).await;
        assert_ne!(problem.trace_id, "unknown");
        ids.push(problem.trace_id);
    }
    assert_ne!(ids[0], ids[1]);
    Ok(())
}
