use actix_web::web;

pub mod commands;
pub mod games;
pub mod health;
pub mod players;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Roster: /api/players
    cfg.service(web::scope("/api/players").configure(players::configure_routes));

    // Games, plays and stats: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Enumerated command surface: /api/commands
    cfg.service(web::scope("/api/commands").configure(commands::configure_routes));
}
