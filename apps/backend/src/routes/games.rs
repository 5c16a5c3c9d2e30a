//! Game, play and stats HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::DeletionCandidate;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::DeletedGame;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteGameQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPlayRequest {
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub play_type: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DeleteGameResponse {
    Pending {
        deleted: bool,
        candidate: DeletionCandidate,
    },
    Done {
        deleted: bool,
        #[serde(flatten)]
        outcome: DeletedGame,
    },
}

#[derive(Debug, Serialize)]
struct DeletePlayResponse {
    deleted: bool,
}

/// GET /api/games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = app_state.games().list_games().await?;
    Ok(HttpResponse::Ok().json(games))
}

/// POST /api/games
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games().create_game(&body.name).await?;
    Ok(HttpResponse::Created().json(game))
}

/// GET /api/games/lookup?q=
///
/// First step of deletion: shows which game a name or id resolves to.
async fn lookup_game(
    app_state: web::Data<AppState>,
    query: web::Query<LookupQuery>,
) -> Result<HttpResponse, AppError> {
    let candidate = app_state.games().find_game(&query.q).await?;
    Ok(HttpResponse::Ok().json(candidate))
}

/// DELETE /api/games/{game_id}?confirm=true
///
/// `game_id` may be an id or a name. Without `confirm=true` nothing is
/// deleted and the matched candidate is returned.
async fn delete_game(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DeleteGameQuery>,
) -> Result<HttpResponse, AppError> {
    let games = app_state.games();
    let candidate = games.find_game(&path).await?;
    if !query.confirm {
        return Ok(HttpResponse::Ok().json(DeleteGameResponse::Pending {
            deleted: false,
            candidate,
        }));
    }
    let outcome = games.confirm_delete(&candidate).await?;
    Ok(HttpResponse::Ok().json(DeleteGameResponse::Done {
        deleted: true,
        outcome,
    }))
}

/// GET /api/games/{game_id}/plays
async fn list_plays(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let data = app_state.plays().initial_game_data(&path).await?;
    Ok(HttpResponse::Ok().json(data))
}

/// POST /api/games/{game_id}/plays
///
/// 201 when the play was stored, 202 when it was accepted but the store
/// append failed.
async fn record_play(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<RecordPlayRequest>,
) -> Result<HttpResponse, AppError> {
    let recorded = app_state
        .plays()
        .record_play(&body.player, &body.play_type, &path)
        .await?;
    let mut response = if recorded.persisted {
        HttpResponse::Created()
    } else {
        HttpResponse::Accepted()
    };
    Ok(response.json(recorded))
}

/// DELETE /api/games/{game_id}/plays/{play_id}
async fn delete_play(
    app_state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (game_id, play_id) = path.into_inner();
    let deleted = app_state.plays().delete_play(&play_id, &game_id).await?;
    Ok(HttpResponse::Ok().json(DeletePlayResponse { deleted }))
}

/// GET /api/games/{game_id}/stats
async fn game_stats(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let report = app_state.stats().compute_stats(&path).await?;
    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    )
    .route("/lookup", web::get().to(lookup_game))
    .route("/{game_id}", web::delete().to(delete_game))
    .service(
        web::resource("/{game_id}/plays")
            .route(web::get().to(list_plays))
            .route(web::post().to(record_play)),
    )
    .route("/{game_id}/plays/{play_id}", web::delete().to(delete_play))
    .route("/{game_id}/stats", web::get().to(game_stats));
}
