//! Assertions for problem+json error responses.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend error body, kept local so this crate stays independent.
#[derive(Debug, Deserialize)]
pub struct ProblemBody {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Check status, code, trace id parity and (optionally) a detail substring.
///
/// Returns the parsed body so callers can make further assertions.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemBody {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "expected problem+json content type, got '{content_type}'"
    );

    let problem: ProblemBody =
        serde_json::from_slice(body).expect("body should be problem details JSON");

    let header_trace = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be ASCII");
    assert_eq!(
        problem.trace_id, header_trace,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());

    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "expected detail to contain '{fragment}', got '{}'",
            problem.detail
        );
    }

    problem
}

/// Same as [`assert_problem_details_from_parts`] for a test `ServiceResponse`.
pub async fn assert_problem_details_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemBody {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    )
}
