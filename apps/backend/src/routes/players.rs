//! Roster HTTP routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::commands::NumberInput;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    #[serde(default)]
    pub number: NumberInput,
    #[serde(default)]
    pub name: String,
}

/// GET /api/players
async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = app_state.roster().list_players().await?;
    Ok(HttpResponse::Ok().json(players))
}

/// POST /api/players
async fn add_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let player = app_state
        .roster()
        .add_player(&body.number.as_text(), &body.name)
        .await?;
    Ok(HttpResponse::Created().json(player))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_players))
            .route(web::post().to(add_player)),
    );
}
