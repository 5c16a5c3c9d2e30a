use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// CORS for the scorebook front end.
///
/// Origins come from the comma-separated `CORS_ALLOWED_ORIGINS`; entries
/// that are empty, `null` or not http(s) are ignored. With nothing valid
/// configured only localhost:3000 is allowed.
pub fn cors_middleware() -> Cors {
    let allowed = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
    let origins = if allowed.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        allowed
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }
    cors
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
