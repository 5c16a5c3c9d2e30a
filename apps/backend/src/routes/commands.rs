use actix_web::{web, HttpResponse};
use tracing::info;

use crate::commands::{dispatch, Command};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

/// POST /api/commands
///
/// Body is a `Command` tagged by `op`, e.g. `{"op": "computeStats", "gameId": "G…"}`.
async fn run_command(
    app_state: web::Data<AppState>,
    body: ValidatedJson<Command>,
) -> Result<HttpResponse, AppError> {
    let command = body.into_inner();
    let op = command.name();
    let output = dispatch(&app_state, command).await?;
    info!(op, "Command completed");
    Ok(HttpResponse::Ok().json(output))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(run_command));
}
