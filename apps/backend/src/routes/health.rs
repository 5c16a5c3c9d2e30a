use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::repos::tables::ROSTER;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    store: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store_error: Option<String>,
    play_log: &'static str,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    // A cheap read proves the store answers within its timeout.
    let (store, store_error) = match app_state.store.table_exists(ROSTER).await {
        Ok(_) => ("ok", None),
        Err(e) => ("error", Some(e.to_string())),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        store,
        store_error,
        play_log: app_state.layout.as_str(),
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
